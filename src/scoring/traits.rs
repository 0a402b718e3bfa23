use super::types::{Fetched, MetricSet};
use async_trait::async_trait;

/// Anything that can score a page URL.
///
/// Implementations must not fail: every problem is reported through
/// [`Fetched::Failed`].
#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn fetch_score(&self, url: &str) -> Fetched<MetricSet>;

    fn name(&self) -> &str;
}
