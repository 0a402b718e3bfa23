use super::urls::parse_page_url;
use crate::config::OverlayConfig;
use crate::error::OverlayError;
use url::Url;

/// Explicit switches handed to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySettings {
    pub scoring_enabled: bool,
}

impl OverlaySettings {
    pub fn enabled() -> Self {
        Self {
            scoring_enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            scoring_enabled: false,
        }
    }

    /// Settings for a host page: scoring is off when configuration turns it
    /// off or the page URL carries the disable parameter.
    pub fn for_page(page_url: &str, config: &OverlayConfig) -> Result<Self, OverlayError> {
        let url = parse_page_url(page_url)?;
        Ok(Self {
            scoring_enabled: scoring_enabled(&url, config),
        })
    }
}

pub fn scoring_enabled(page_url: &Url, config: &OverlayConfig) -> bool {
    config.enabled && !has_disable_param(page_url, config)
}

fn has_disable_param(page_url: &Url, config: &OverlayConfig) -> bool {
    page_url
        .query_pairs()
        .any(|(key, value)| key == config.disable_param && value == config.disable_value)
}
