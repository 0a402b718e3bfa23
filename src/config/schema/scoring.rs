use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Scoring service endpoint, without query string
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Sent as the `apiKey` query parameter
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Per-request timeout in seconds (default: 0, no timeout)
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://webpage-aesthetics-ns-team-xpsuccess-sandbox.corp.ethos13-stage-va7.ethos.adobe.net/aesthetics/predict".into()
}

fn default_api_key() -> String {
    "xpsucc3ss".into()
}

impl ScoringConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            timeout_secs: 0,
        }
    }
}
