//! Shared low-level helpers for the normalizers.

use chrono::{DateTime, NaiveDate};

use crate::diag::DiagnosticSink;

/// Canonical date rendering used across all normalized records.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Re-renders `date` in canonical `YYYY-MM-DD` form.
///
/// Accepts plain dates and RFC 3339 timestamps. When `date` is absent or
/// unparseable the caller-supplied `fallback` is returned instead (which may
/// itself be absent); a parse failure is reported through `diag` but never
/// propagated.
pub fn format_date(
    date: Option<&str>,
    fallback: Option<&str>,
    diag: &dyn DiagnosticSink,
) -> Option<String> {
    let Some(raw) = date else {
        return fallback.map(str::to_string);
    };

    let trimmed = raw.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(parsed.format(DATE_FORMAT).to_string());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive().format(DATE_FORMAT).to_string());
    }

    diag.failure("format_date", &format!("unparseable date {trimmed:?}"));
    fallback.map(str::to_string)
}

/// Extracts a price from a JSON leaf that may be a number or a numeric
/// string. `None` for anything else, including non-finite values.
pub(crate) fn price_value(value: Option<&serde_json::Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|price| price.is_finite())
}

/// Coerces an upstream price leaf to `f64`, substituting `default` when the
/// value is absent, null, or not a valid number.
#[must_use]
pub fn parse_price(value: Option<&serde_json::Value>, default: f64) -> f64 {
    price_value(value).unwrap_or(default)
}
