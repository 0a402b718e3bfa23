use super::activation::OverlaySettings;
use super::urls::{PageUrls, derive_urls};
use crate::compare::{ComparisonTable, build};
use crate::config::{Config, OverlayConfig};
use crate::error::{FetchFailure, OverlayError, PreviewError};
use crate::scoring::{Fetched, ScoreSource};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayOutcome {
    /// Scoring switched off; nothing was fetched.
    Disabled,
    /// The preview score could not be fetched, so there is nothing to show.
    Unavailable(FetchFailure),
    Ready(ComparisonTable),
}

/// Scores a page's preview and live variants and aligns the results.
pub struct Overlay<'a> {
    source: &'a dyn ScoreSource,
    config: &'a OverlayConfig,
}

impl<'a> Overlay<'a> {
    pub fn new(source: &'a dyn ScoreSource, config: &'a OverlayConfig) -> Self {
        Self { source, config }
    }

    pub fn urls(&self, page_url: &str) -> Result<PageUrls, OverlayError> {
        derive_urls(page_url, self.config)
    }

    pub async fn run(
        &self,
        page_url: &str,
        settings: OverlaySettings,
    ) -> Result<OverlayOutcome, OverlayError> {
        let urls = self.urls(page_url)?;

        if !settings.scoring_enabled {
            debug!(page = %urls.page, "overlay.disabled");
            return Ok(OverlayOutcome::Disabled);
        }

        info!(
            source = self.source.name(),
            live = %urls.live,
            preview = %urls.preview,
            "overlay.start"
        );

        let (live, preview) = tokio::join!(
            self.source.fetch_score(&urls.live),
            self.source.fetch_score(&urls.preview),
        );

        let preview = match preview {
            Fetched::Ok(metrics) => metrics,
            Fetched::Failed(reason) => {
                warn!(page = %urls.page, error = %reason, "overlay.unavailable");
                return Ok(OverlayOutcome::Unavailable(reason));
            }
        };

        let table = build(&preview, live.as_ok());
        info!(
            rows = table.rows.len(),
            live_column = table.has_live_column,
            "overlay.ready"
        );
        Ok(OverlayOutcome::Ready(table))
    }
}

/// Validate `config`, work out the page's settings, and run the overlay.
pub async fn run_for_page(
    source: &dyn ScoreSource,
    config: &Config,
    page_url: &str,
) -> Result<OverlayOutcome, PreviewError> {
    config.validate()?;
    let settings = OverlaySettings::for_page(page_url, &config.overlay)?;
    Ok(Overlay::new(source, &config.overlay)
        .run(page_url, settings)
        .await?)
}
