//! Normalization of raw locations into [`NormalizedLocation`].

use tanda_core::{Coordinates, NormalizedLocation};

use crate::diag::DiagnosticSink;
use crate::error::NormalizeError;
use crate::types::{RawAddress, RawLocation};

const UNKNOWN_PROVIDER: &str = "UNKNOWN";
const UNKNOWN_NAME: &str = "Unknown Location";

/// Normalizes a raw location. Never fails visibly: internal errors are
/// reported through `diag` and degrade to a fallback record carrying the
/// original reference when available.
pub fn normalize_location(raw: &RawLocation, diag: &dyn DiagnosticSink) -> NormalizedLocation {
    match build_location(raw) {
        Ok(record) => record,
        Err(error) => {
            diag.failure("normalize_location", &error.to_string());
            NormalizedLocation::fallback(raw.reference.clone().unwrap_or_default())
        }
    }
}

#[allow(clippy::unnecessary_wraps)] // failure boundary kept uniform across normalizers
fn build_location(raw: &RawLocation) -> Result<NormalizedLocation, NormalizeError> {
    let center = raw.center.as_ref();

    Ok(NormalizedLocation {
        reference: raw.reference.clone().unwrap_or_default(),
        provider: raw
            .provider
            .clone()
            .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        address: synthesize_address(raw),
        coordinates: Coordinates::from_parts(
            center.and_then(|c| c.latitude),
            center.and_then(|c| c.longitude),
        ),
    })
}

/// Joins the present parts of the structured address with `", "`, falling
/// back to the unstructured address verbatim, else absent. Missing parts
/// never leave stray separators.
fn synthesize_address(raw: &RawLocation) -> Option<String> {
    if let Some(address) = raw.address.as_ref() {
        let joined = join_address(address);
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    // An empty unstructured address counts as absent; the record's address
    // is never an empty string.
    raw.unstructured_address
        .clone()
        .filter(|address| !address.is_empty())
}

fn join_address(address: &RawAddress) -> String {
    [
        address.street.as_deref(),
        address.administrative_area.as_deref(),
        address.state.as_deref(),
        address.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}
