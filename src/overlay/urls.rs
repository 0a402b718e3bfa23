use crate::config::OverlayConfig;
use crate::error::OverlayError;
use serde::Serialize;
use url::Url;

/// The two URLs scored for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageUrls {
    /// Page URL after local-origin substitution
    pub page: String,
    pub live: String,
    /// Carries the disable parameter so the scoring service's own page load
    /// does not trigger another scoring round
    pub preview: String,
}

pub fn parse_page_url(page_url: &str) -> Result<Url, OverlayError> {
    Url::parse(page_url.trim()).map_err(|e| OverlayError::InvalidPageUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })
}

/// Replace the local development origin with the configured preview host.
pub fn resolve_local_origin(page_url: &str, config: &OverlayConfig) -> String {
    let page_url = page_url.trim();
    let origin = config.local_origin.trim_end_matches('/');
    if !origin.is_empty()
        && let Some(rest) = page_url.strip_prefix(origin)
        && (rest.is_empty() || rest.starts_with(['/', '?', '#']))
    {
        return format!("{}{rest}", config.default_host.trim_end_matches('/'));
    }
    page_url.to_string()
}

pub fn derive_urls(page_url: &str, config: &OverlayConfig) -> Result<PageUrls, OverlayError> {
    let resolved = resolve_local_origin(page_url, config);
    let page = parse_page_url(&resolved)?;

    let live = page
        .as_str()
        .replacen(&config.preview_suffix, &config.live_suffix, 1);

    let mut preview = page.clone();
    preview
        .query_pairs_mut()
        .append_pair(&config.disable_param, &config.disable_value);

    Ok(PageUrls {
        page: page.to_string(),
        live,
        preview: preview.to_string(),
    })
}
