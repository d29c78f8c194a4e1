use thiserror::Error;

/// Internal failure channel for the normalizers.
///
/// These never escape the public API: each normalizer catches them at its
/// boundary, reports through the injected [`crate::DiagnosticSink`], and
/// returns the documented fallback record.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("season from {start} to {end} spans {days} days (cap {cap})")]
    SeasonSpan {
        start: String,
        end: String,
        days: i64,
        cap: i64,
    },

    #[error("calendar overflow advancing past {date}")]
    DateOverflow { date: String },
}
