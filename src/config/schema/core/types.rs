use super::super::{ObservabilityConfig, OverlayConfig, ScoringConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.scoring.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "scoring.endpoint must not be empty".into(),
            ));
        }
        let parsed = Url::parse(endpoint).map_err(|e| {
            ConfigError::Validation(format!("scoring.endpoint is not a URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "scoring.endpoint must use http or https, got {}",
                parsed.scheme()
            )));
        }

        for (field, value) in [
            ("overlay.preview_suffix", &self.overlay.preview_suffix),
            ("overlay.live_suffix", &self.overlay.live_suffix),
            ("overlay.disable_param", &self.overlay.disable_param),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }
}
