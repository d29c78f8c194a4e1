//! Normalization from raw tours-and-activities API payloads to the records
//! in [`tanda_core`].
//!
//! Every upstream field may be missing, null, or malformed; each normalizer
//! always produces a schema-valid record, substituting documented defaults
//! for absent data and degrading to a fallback record when something
//! unexpected fails inside the computation. Failures are reported through an
//! injected [`DiagnosticSink`] rather than a process-wide logger.

pub mod availability;
pub mod destination;
pub mod diag;
pub mod error;
pub mod helpers;
pub mod location;
pub mod product;
pub mod types;

pub use availability::normalize_availability;
pub use destination::normalize_destination;
pub use diag::{CaptureSink, DiagnosticSink, TracingSink};
pub use error::NormalizeError;
pub use helpers::{format_date, parse_price};
pub use location::normalize_location;
pub use product::normalize_product;
pub use types::{RawAvailability, RawDestination, RawLocation, RawProduct};
