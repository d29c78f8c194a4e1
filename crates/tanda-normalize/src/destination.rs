//! Normalization of raw destinations into [`NormalizedDestination`].

use tanda_core::{Coordinates, NormalizedDestination};

use crate::diag::DiagnosticSink;
use crate::error::NormalizeError;
use crate::types::RawDestination;

const UNKNOWN_NAME: &str = "Unknown Destination";
const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Normalizes a raw destination. Never fails visibly: internal errors are
/// reported through `diag` and degrade to a fallback record carrying the
/// original destination id when available (0 otherwise).
pub fn normalize_destination(
    raw: &RawDestination,
    diag: &dyn DiagnosticSink,
) -> NormalizedDestination {
    match build_destination(raw) {
        Ok(record) => record,
        Err(error) => {
            diag.failure("normalize_destination", &error.to_string());
            NormalizedDestination::fallback(raw.destination_id.unwrap_or(0))
        }
    }
}

#[allow(clippy::unnecessary_wraps)] // failure boundary kept uniform across normalizers
fn build_destination(raw: &RawDestination) -> Result<NormalizedDestination, NormalizeError> {
    let center = raw.center.as_ref();

    Ok(NormalizedDestination {
        // Zero is the documented "unknown" sentinel, not a valid id.
        destination_id: raw.destination_id.unwrap_or(0),
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        destination_type: raw
            .destination_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        lookup_id: raw.lookup_id.clone().unwrap_or_default(),
        parent_destination_id: raw.parent_destination_id,
        url: raw.url.clone(),
        currency_code: raw.currency_code.clone(),
        time_zone: raw.time_zone.clone(),
        iata_codes: raw.iata_codes.clone(),
        coordinates: Coordinates::from_parts(
            center.and_then(|c| c.latitude),
            center.and_then(|c| c.longitude),
        ),
    })
}
