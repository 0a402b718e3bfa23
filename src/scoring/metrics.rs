use super::types::{MetricSet, ScoreEntry, ScoreResponse};
use serde_json::Value;

/// Normalize a scoring response into a [`MetricSet`].
///
/// Names have every `_` replaced by a space. Values are coerced to `f64` and
/// formatted with two decimals; a value that does not coerce becomes `"nan"`
/// instead of failing the whole set. A name seen twice keeps its first
/// position and takes the later value.
#[must_use]
pub fn parse(response: ScoreResponse) -> MetricSet {
    parse_entries(response.aesthetics_scores)
}

pub fn parse_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> MetricSet {
    let mut set = MetricSet::new();
    for entry in entries {
        let name = normalize_name(&entry.feature_name);
        let value = fixed2(coerce_feature_value(&entry.feature_value));
        set.insert(name, value);
    }
    set
}

pub fn normalize_name(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Coerce a JSON feature value to `f64`.
///
/// Numbers pass through. Strings use their leading numeric prefix after
/// skipping whitespace (`"0.5px"` is `0.5`). Everything else is NaN.
#[must_use]
pub fn coerce_feature_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => leading_float(s),
        _ => f64::NAN,
    }
}

fn leading_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Format with exactly two decimals, rounding half away from zero.
///
/// `format!("{:.2}")` already rounds the exact binary value correctly but
/// breaks exact ties to even. Exact ties at two decimals only exist for odd
/// multiples of 1/8, so those are rounded by hand.
pub(crate) fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Negative zero prints unsigned.
    let value = if value == 0.0 { 0.0 } else { value };

    let eighths = value * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let rounded = (value * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }

    format!("{value:.2}")
}

/// Numeric counterpart of [`fixed2`].
pub(crate) fn round2(value: f64) -> f64 {
    fixed2(value).parse().unwrap_or(value)
}
