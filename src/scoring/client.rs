//! HTTP client for the aesthetics scoring service.
//!
//! One GET per page: `<endpoint>?apiKey=<key>&url=<page>`. The response body
//! is `{ "aesthetics_scores": [ { "feature_name", "feature_value" }, ... ] }`.

use super::http_client::build_scoring_client_with_timeout;
use super::metrics::parse;
use super::traits::ScoreSource;
use super::types::{Fetched, MetricSet, ScoreResponse};
use crate::config::ScoringConfig;
use crate::error::FetchFailure;
use async_trait::async_trait;
use reqwest::Client;
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

pub struct ScoringClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl ScoringClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Option<Duration>) -> Self {
        Self {
            endpoint: endpoint.trim().to_string(),
            api_key: api_key.to_string(),
            client: build_scoring_client_with_timeout(timeout),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(&config.endpoint, &config.api_key, config.timeout())
    }

    /// Full request URL for scoring `target`. The target is percent-encoded
    /// into the `url` query parameter.
    pub fn request_url(&self, target: &str) -> Result<Url, FetchFailure> {
        Url::parse_with_params(
            &self.endpoint,
            &[("apiKey", self.api_key.as_str()), ("url", target)],
        )
        .map_err(|e| FetchFailure::Request(format!("endpoint {}: {e}", self.endpoint)))
    }

    async fn try_fetch(&self, target: &str) -> Result<MetricSet, FetchFailure> {
        let request_url = self.request_url(target)?;

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| FetchFailure::Network(describe(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::Network(describe(e)))?;

        let scores: ScoreResponse =
            serde_json::from_slice(&body).map_err(|e| FetchFailure::Decode(e.to_string()))?;

        Ok(parse(scores))
    }
}

#[async_trait]
impl ScoreSource for ScoringClient {
    async fn fetch_score(&self, url: &str) -> Fetched<MetricSet> {
        info!(url = %url, "scoring.request");
        let started = Instant::now();

        match self.try_fetch(url).await {
            Ok(metrics) => {
                let ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                info!(url = %url, duration_ms = ms, metrics = metrics.len(), "scoring.response");
                Fetched::Ok(metrics)
            }
            Err(reason) => {
                warn!(url = %url, error = %reason, "scoring.failed");
                Fetched::Failed(reason)
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Error text with its source chain, minus the request URL (it carries the
/// API key).
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}
