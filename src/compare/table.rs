use crate::scoring::MetricSet;
use crate::scoring::metrics::round2;
use serde::Serialize;

/// Which way a metric moved between live and preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Positive,
    Negative,
}

/// How strongly a row is tinted.
///
/// `delta` is the signed score difference rounded to two decimals.
/// `intensity` is `|delta|` clamped to `[0, 1]`: the browser widget fed the
/// raw value into a CSS alpha channel, which clamps on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HighlightSpec {
    pub channel: Channel,
    pub delta: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric_name: String,
    pub preview_value: String,
    pub live_value: Option<String>,
    pub highlight: Option<HighlightSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub has_live_column: bool,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn headers(&self) -> Vec<&'static str> {
        if self.has_live_column {
            vec!["Metric", "Preview", "Live"]
        } else {
            vec!["Metric", "Preview"]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Align a preview metric set against an optional live one.
///
/// Rows follow the preview order. Metrics that exist only in `live` are not
/// shown. A `Some` live set adds the live column even when it is empty.
#[must_use]
pub fn build(preview: &MetricSet, live: Option<&MetricSet>) -> ComparisonTable {
    let rows = preview
        .iter()
        .map(|(name, preview_value)| {
            let live_value = live
                .and_then(|set| set.get(name))
                .filter(|value| !value.is_empty());
            ComparisonRow {
                metric_name: name.to_string(),
                preview_value: preview_value.to_string(),
                live_value: live_value.map(ToString::to_string),
                highlight: live_value.and_then(|live_value| highlight(preview_value, live_value)),
            }
        })
        .collect();

    ComparisonTable {
        has_live_column: live.is_some(),
        rows,
    }
}

/// Highlight for one metric, or `None` when the values are level (or either
/// side is not a number).
pub fn highlight(preview_value: &str, live_value: &str) -> Option<HighlightSpec> {
    let delta = score_delta(parse_value(preview_value), parse_value(live_value));

    let channel = if delta > 0.0 {
        Channel::Positive
    } else if delta < 0.0 {
        Channel::Negative
    } else {
        return None;
    };

    Some(HighlightSpec {
        channel,
        delta,
        intensity: delta.abs().min(1.0),
    })
}

/// `((preview + 1) - (live + 1)) * 2`, rounded to two decimals.
///
/// TODO: confirm with the scoring service owners whether the `+ 1` offsets
/// are meant as a normalization step; kept as-is until then.
pub fn score_delta(preview: f64, live: f64) -> f64 {
    round2(((preview + 1.0) - (live + 1.0)) * 2.0)
}

fn parse_value(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}
