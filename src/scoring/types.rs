use crate::error::FetchFailure;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw body of a scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub aesthetics_scores: Vec<ScoreEntry>,
}

/// One feature as sent by the scoring service. The value arrives as either a
/// JSON string or number and is coerced later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub feature_name: String,
    pub feature_value: serde_json::Value,
}

/// Normalized metric name → value formatted with two decimals, in first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetricSet {
    entries: IndexMap<String, String>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates a metric. An update keeps the original position.
    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Outcome of one scoring call.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Ok(T),
    Failed(FetchFailure),
}

impl<T> Fetched<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<T, FetchFailure> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Failed(reason) => Err(reason),
        }
    }
}
