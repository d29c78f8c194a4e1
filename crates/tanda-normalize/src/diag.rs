//! Failure reporting for the normalization boundary.
//!
//! The normalizers never propagate errors; they record them through a sink
//! injected by the caller and return a fallback record. Production code
//! passes [`TracingSink`]; tests pass [`CaptureSink`] to assert on what was
//! recorded.

use std::sync::Mutex;

/// Receives one event per recovered normalization failure.
pub trait DiagnosticSink {
    /// Records a failure inside `operation`. `message` is human-readable
    /// detail; the record the caller receives is already the fallback.
    fn failure(&self, operation: &str, message: &str);
}

/// Routes failures to the `tracing` subscriber configured by the host
/// process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn failure(&self, operation: &str, message: &str) {
        tracing::warn!(operation, message, "normalization failure, returning fallback");
    }
}

/// One event recorded by [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    pub operation: String,
    pub message: String,
}

/// Collects failures in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct CaptureSink {
    events: Mutex<Vec<CapturedFailure>>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<CapturedFailure> {
        self.events.lock().map(|mut events| std::mem::take(&mut *events)).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().map(|events| events.is_empty()).unwrap_or(true)
    }
}

impl DiagnosticSink for CaptureSink {
    fn failure(&self, operation: &str, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(CapturedFailure {
                operation: operation.to_string(),
                message: message.to_string(),
            });
        }
    }
}
