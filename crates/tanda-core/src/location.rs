use serde::{Deserialize, Serialize};

use crate::destination::Coordinates;

/// A meeting point or point of interest normalized from the upstream
/// locations payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLocation {
    /// Upstream location reference, copied verbatim. Empty string when the
    /// source payload carried none.
    pub reference: String,
    /// Location provider (`"TRIPADVISOR"`, ...). `"UNKNOWN"` when absent,
    /// `"ERROR"` on a degraded record.
    pub provider: String,
    pub name: String,
    /// Human-readable address synthesized from the structured address block,
    /// or the unstructured address string verbatim. Absent when neither
    /// exists — never an empty string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl NormalizedLocation {
    /// Provider sentinel marking a degraded record from the failure boundary.
    pub const ERROR_PROVIDER: &'static str = "ERROR";

    /// Minimal valid record returned when normalization fails internally.
    #[must_use]
    pub fn fallback(reference: String) -> Self {
        Self {
            reference,
            provider: Self::ERROR_PROVIDER.to_string(),
            name: "Unknown Location".to_string(),
            address: None,
            coordinates: None,
        }
    }
}
