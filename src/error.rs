use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `aesthetics-preview`.
///
/// Scoring failures are not in here: a failed fetch is a value
/// ([`FetchFailure`] inside `Fetched::Failed`), not an error. What remains are
/// the conditions that stop a command before the pipeline can run.
#[derive(Debug, Error)]
pub enum PreviewError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Overlay orchestration ───────────────────────────────────────────
    #[error("overlay: {0}")]
    Overlay(#[from] OverlayError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Scoring fetch failures ─────────────────────────────────────────────────

/// Why a scoring call produced no metrics.
///
/// Messages never carry the scoring request URL, which holds the API key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("scoring service answered with status {0}")]
    Status(u16),

    #[error("scoring request failed: {0}")]
    Network(String),

    #[error("scoring response could not be decoded: {0}")]
    Decode(String),

    #[error("invalid scoring request: {0}")]
    Request(String),
}

// ─── Overlay errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid page url {url}: {reason}")]
    InvalidPageUrl { url: String, reason: String },
}
