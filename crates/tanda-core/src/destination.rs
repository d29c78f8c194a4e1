use serde::{Deserialize, Serialize};

/// A geographic point attached to a destination or location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds coordinates only when both parts are present and non-zero.
    ///
    /// A coordinate of exactly 0.0 is indistinguishable from absent in the
    /// upstream feed, so points on the equator or prime meridian are dropped.
    /// Known precision loss, preserved from the observed upstream behavior.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0 => {
                Some(Self {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        }
    }
}

/// A destination normalized from the upstream taxonomy payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDestination {
    /// Upstream destination id. Zero is the "unknown" sentinel, not a valid
    /// id — callers must treat it as absent.
    pub destination_id: i64,
    pub name: String,
    /// Destination kind (`"CITY"`, `"REGION"`, ...). `"UNKNOWN"` when the
    /// source carried none, `"ERROR"` on a degraded record.
    #[serde(rename = "type")]
    pub destination_type: String,
    pub lookup_id: String,
    /// Parent in the destination hierarchy. Passthrough; no cycle checking
    /// happens at this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_destination_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    pub iata_codes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl NormalizedDestination {
    /// Type sentinel marking a degraded record from the failure boundary.
    pub const ERROR_TYPE: &'static str = "ERROR";

    /// Minimal valid record returned when normalization fails internally.
    #[must_use]
    pub fn fallback(destination_id: i64) -> Self {
        Self {
            destination_id,
            name: "Unknown Destination".to_string(),
            destination_type: Self::ERROR_TYPE.to_string(),
            lookup_id: String::new(),
            parent_destination_id: None,
            url: None,
            currency_code: None,
            time_zone: None,
            iata_codes: Vec::new(),
            coordinates: None,
        }
    }

    /// Returns `true` when the record carries a real upstream id.
    #[must_use]
    pub fn has_known_id(&self) -> bool {
        self.destination_id != 0
    }
}
