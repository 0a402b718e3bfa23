//! Host-page side of the pipeline: which URLs to score, whether to score at
//! all, and joining the two fetches into one comparison table.

pub mod activation;
pub mod orchestrator;
pub mod urls;

pub use activation::{OverlaySettings, scoring_enabled};
pub use orchestrator::{Overlay, OverlayOutcome, run_for_page};
pub use urls::{PageUrls, derive_urls, resolve_local_origin};
