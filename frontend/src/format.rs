//! Thai-locale display formatting for result values.
//!
//! Every helper accepts an absent value and renders it as [`PLACEHOLDER`];
//! none of them can fail.

use common::model::product::Metric;
use num_format::{Locale, ToFormattedString};

/// Shown for any value the backend did not send.
pub const PLACEHOLDER: &str = "-";

const LOCALE: Locale = Locale::th;
const BAHT: &str = "฿";

/// Groups thousands and keeps up to three fraction digits, trailing zeros
/// trimmed: `1234567.5` → `1,234,567.5`.
pub fn fmt_number(value: Option<&Metric>) -> String {
    fmt_metric(value, |number| grouped(number, 0, 3))
}

/// Baht amount with exactly two decimals: `1234.5` → `฿1,234.50`.
pub fn fmt_price(value: Option<&Metric>) -> String {
    fmt_metric(value, baht)
}

/// Two fixed decimals: `4.8` → `4.80`.
pub fn fmt_fixed2(value: Option<&Metric>) -> String {
    fmt_metric(value, |number| format!("{:.2}", number))
}

/// Like [`fmt_fixed2`] with a `%` suffix.
pub fn fmt_percent(value: Option<&Metric>) -> String {
    fmt_metric(value, |number| format!("{:.2}%", number))
}

/// Applies `numeric` to numbers; non-numeric values fall back to their raw
/// text, and empty or falsy ones to the placeholder.
fn fmt_metric(value: Option<&Metric>, numeric: impl FnOnce(f64) -> String) -> String {
    match value {
        Some(Metric::Number(number)) => numeric(*number),
        Some(Metric::Text(text)) if !text.is_empty() => text.clone(),
        Some(Metric::Other(other)) if !is_falsy(other) => match other {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        },
        _ => PLACEHOLDER.to_string(),
    }
}

fn baht(value: f64) -> String {
    let amount = grouped(value, 2, 2);
    match amount.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", BAHT, magnitude),
        None if value.is_finite() => format!("{}{}", BAHT, amount),
        None => amount,
    }
}

fn is_falsy(value: &serde_json::Value) -> bool {
    matches!(value, serde_json::Value::Null | serde_json::Value::Bool(false))
}

/// Rounds to `max_fraction` digits, trims trailing zeros down to
/// `min_fraction`, and groups the integer part with the locale separator.
fn grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.*}", max_fraction, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (rounded.as_str(), ""),
    };

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let integer = integer
        .parse::<u128>()
        .map(|n| n.to_formatted_string(&LOCALE))
        .unwrap_or_else(|_| integer.to_string());

    let is_zero = integer == "0" && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}{}{}", sign, integer, LOCALE.decimal(), fraction)
    }
}
