use crate::cli::commands::{Cli, Commands};
use aesthetics_preview::Config;
use aesthetics_preview::overlay::{OverlayOutcome, OverlaySettings, derive_urls, run_for_page};
use aesthetics_preview::render::{OutputFormat, render_metrics, render_table, urls_text};
use aesthetics_preview::scoring::{ScoreSource, ScoringClient};
use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::{info, warn};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Compare { page, format, out } => {
            run_compare(&config, &page, format, out.as_deref()).await
        }
        Commands::Score { url, format } => run_score(&config, &url, format).await,
        Commands::Urls { page } => run_urls(&config, &page),
    }
}

/// Score both variants of `page` and emit the comparison.
///
/// A disabled overlay or a missing preview score is not an error: nothing is
/// emitted and the reason is logged.
async fn run_compare(
    config: &Config,
    page: &str,
    format: OutputFormat,
    out: Option<&Path>,
) -> Result<()> {
    let client = ScoringClient::from_config(&config.scoring);

    match run_for_page(&client, config, page).await? {
        OverlayOutcome::Disabled => {
            info!(page = %page, "scoring disabled for this page; nothing to render");
        }
        OverlayOutcome::Unavailable(reason) => {
            warn!(page = %page, error = %reason, "no preview score; overlay not rendered");
        }
        OverlayOutcome::Ready(table) => {
            let rendered = render_table(&table, format, &config.overlay.stylesheet)?;
            emit(&rendered, out).await?;
        }
    }
    Ok(())
}

async fn run_score(config: &Config, url: &str, format: OutputFormat) -> Result<()> {
    let client = ScoringClient::from_config(&config.scoring);
    let metrics = client
        .fetch_score(url)
        .await
        .into_result()
        .map_err(|reason| anyhow!("scoring {url} failed: {reason}"))?;
    emit(&render_metrics(&metrics, format)?, None).await
}

fn run_urls(config: &Config, page: &str) -> Result<()> {
    let urls = derive_urls(page, &config.overlay)?;
    let settings = OverlaySettings::for_page(page, &config.overlay)?;
    print!("{}", urls_text(&urls, settings.scoring_enabled));
    Ok(())
}

async fn emit(rendered: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
