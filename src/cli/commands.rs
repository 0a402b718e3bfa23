use aesthetics_preview::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `aesthetics-preview` - compare a preview page's aesthetics score with its
/// live counterpart.
#[derive(Parser, Debug)]
#[command(name = "aesthetics-preview")]
#[command(version)]
#[command(about = "Compare aesthetics scores of preview and live pages.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.aesthetics-preview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a page's preview and live variants and render the comparison
    Compare {
        /// URL of the page as seen in the browser
        #[arg(short, long)]
        page: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Score a single URL and list its metrics
    Score {
        /// URL to score, sent as-is
        #[arg(short, long)]
        url: String,

        /// Output format (html falls back to text)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show which URLs would be scored for a page, without scoring them
    Urls {
        /// URL of the page as seen in the browser
        #[arg(short, long)]
        page: String,
    },
}
