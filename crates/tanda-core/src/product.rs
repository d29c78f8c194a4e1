use serde::{Deserialize, Serialize};

/// A tour or activity product normalized from the upstream catalog payload.
///
/// Required fields are always populated; `tanda-normalize` substitutes the
/// documented defaults when the source data is missing. The two genuinely
/// optional fields (`original_price`, `primary_destination_id`) are absent on
/// the wire rather than null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    /// Upstream product code, copied verbatim. Empty string when the source
    /// payload carried none.
    pub product_code: String,
    pub title: String,
    pub description: String,
    /// URL of the 720×480 variant of the cover image, or `""` when the
    /// product has no cover image in that resolution.
    pub image_url: String,
    /// URL of the 100×100 variant of the cover image, or `""`.
    pub thumbnail_url: String,
    /// From-price in `currency`. Zero when the source had no pricing data.
    pub price: f64,
    /// Pre-discount price. Absent (not zero) when the source had no discount
    /// data, so callers can distinguish "no discount" from "free".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// ISO 4217 currency code (e.g. `"USD"`).
    pub currency: String,
    /// Combined average review rating. Zero when unreviewed.
    pub rating: f64,
    pub review_count: i64,
    /// All destination references attached to the product, in source order.
    /// A missing reference becomes `""` rather than dropping the entry.
    pub destination_ids: Vec<String>,
    /// Reference of the first destination flagged `primary`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_destination_id: Option<String>,
    /// Upstream numeric tag ids.
    pub tags: Vec<i64>,
    /// Upstream flag strings (e.g. `"FREE_CANCELLATION"`).
    pub flags: Vec<String>,
    pub booking_url: String,
    /// Whether the upstream marked any of the text as machine translated.
    pub contains_machine_translated_text: bool,
}

impl NormalizedProduct {
    /// Title sentinel used by [`NormalizedProduct::fallback`] when the source
    /// title could not be recovered.
    pub const FALLBACK_TITLE: &'static str = "Error Processing Product";

    /// Minimal valid record returned when normalization fails internally.
    ///
    /// Carries whatever identity was safely extracted before the failure so
    /// the caller can still correlate the record with its source.
    #[must_use]
    pub fn fallback(product_code: String, title: Option<String>) -> Self {
        Self {
            product_code,
            title: title.unwrap_or_else(|| Self::FALLBACK_TITLE.to_string()),
            description: String::new(),
            image_url: String::new(),
            thumbnail_url: String::new(),
            price: 0.0,
            original_price: None,
            currency: "USD".to_string(),
            rating: 0.0,
            review_count: 0,
            destination_ids: Vec::new(),
            primary_destination_id: None,
            tags: Vec::new(),
            flags: Vec::new(),
            booking_url: String::new(),
            contains_machine_translated_text: false,
        }
    }

    /// Returns `true` if the product carries pre-discount price data.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some()
    }
}
