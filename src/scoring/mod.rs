pub mod client;
pub mod http_client;
pub mod metrics;
pub mod traits;
pub mod types;

pub use client::ScoringClient;
pub use metrics::{coerce_feature_value, normalize_name, parse, parse_entries};
pub use traits::ScoreSource;
pub use types::{Fetched, MetricSet, ScoreEntry, ScoreResponse};
