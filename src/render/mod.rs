//! Presentation of comparison tables and metric sets.

pub mod html;
pub mod text;

use crate::compare::ComparisonTable;
use crate::scoring::MetricSet;
use anyhow::{Context, Result};
use clap::ValueEnum;

pub use html::{overlay_html, table_html};
pub use text::{metrics_text, table_text, urls_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, colored terminal table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Overlay badge markup
    Html,
}

pub fn render_table(
    table: &ComparisonTable,
    format: OutputFormat,
    stylesheet: &str,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table_text(table)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(table).context("Failed to serialize comparison table")
        }
        OutputFormat::Html => Ok(overlay_html(table, stylesheet)),
    }
}

/// `Html` has no standalone form for a single metric set and falls back to
/// text.
pub fn render_metrics(metrics: &MetricSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(metrics).context("Failed to serialize metric set")
        }
        OutputFormat::Text | OutputFormat::Html => Ok(metrics_text(metrics)),
    }
}
