use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Master switch for scoring (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Host suffix of preview pages (default: .hlx.page)
    #[serde(default = "default_preview_suffix")]
    pub preview_suffix: String,
    /// Host suffix of live pages (default: .hlx.live)
    #[serde(default = "default_live_suffix")]
    pub live_suffix: String,
    /// Local development origin, replaced by `default_host` before scoring
    #[serde(default = "default_local_origin")]
    pub local_origin: String,
    /// Preview host used in place of `local_origin`
    #[serde(default = "default_host")]
    pub default_host: String,
    /// Query parameter that switches the overlay off
    #[serde(default = "default_disable_param")]
    pub disable_param: String,
    #[serde(default = "default_disable_value")]
    pub disable_value: String,
    /// Stylesheet linked by the HTML overlay
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

fn default_true() -> bool {
    true
}

fn default_preview_suffix() -> String {
    ".hlx.page".into()
}

fn default_live_suffix() -> String {
    ".hlx.live".into()
}

fn default_local_origin() -> String {
    "http://localhost:3000".into()
}

fn default_host() -> String {
    "https://main--gw22-aesthetics-scoring-franklin--chicharr.hlx.page".into()
}

fn default_disable_param() -> String {
    "aesthetics".into()
}

fn default_disable_value() -> String {
    "disabled".into()
}

fn default_stylesheet() -> String {
    "/tools/preview/aesthetics-preview.css".into()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            preview_suffix: default_preview_suffix(),
            live_suffix: default_live_suffix(),
            local_origin: default_local_origin(),
            default_host: default_host(),
            disable_param: default_disable_param(),
            disable_value: default_disable_value(),
            stylesheet: default_stylesheet(),
        }
    }
}
