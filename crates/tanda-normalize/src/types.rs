//! Raw tours-and-activities API payload types.
//!
//! ## Observed shape
//!
//! Every field at every nesting level can be missing or null, and nested
//! objects can be absent wholesale, so everything here is `Option` or a
//! defaulted collection and every struct carries `#[serde(default)]`.
//! Normalization (not deserialization) decides what a missing field means.
//!
//! ### Price leaves
//! `fromPrice`, `fromPriceBeforeDiscount`, and `recommendedRetailPrice` have
//! been observed both as JSON numbers and as numeric strings depending on
//! the endpoint, so they are modeled as [`serde_json::Value`] and coerced by
//! [`crate::helpers::parse_price`].
//!
//! ### Destination references on products
//! The reference field is literally named `ref` on the wire; entries may
//! carry a `primary` flag but usually omit it.
//!
//! ### Availability calendars
//! A product's calendar arrives as seasons (closed date ranges). Each season
//! holds pricing records scoped to weekday names (`"SUNDAY"`..`"SATURDAY"`),
//! and each pricing record holds timed entries whose `unavailableDates`
//! lists specific blackout dates as objects with a `date` string.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field. `#[serde(default)]` only
/// covers absent keys; collection fields also arrive as `null`.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One product from the catalog endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProduct {
    pub product_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<RawImage>,
    pub reviews: Option<RawReviews>,
    pub pricing: Option<RawPricing>,
    #[serde(deserialize_with = "null_default")]
    pub destinations: Vec<RawDestinationRef>,
    /// Numeric tag ids.
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<i64>,
    /// Flag strings such as `"FREE_CANCELLATION"` or `"LIKELY_TO_SELL_OUT"`.
    #[serde(deserialize_with = "null_default")]
    pub flags: Vec<String>,
    pub product_url: Option<String>,
    pub translation_info: Option<RawTranslationInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawImage {
    pub is_cover: Option<bool>,
    #[serde(deserialize_with = "null_default")]
    pub variants: Vec<RawImageVariant>,
}

/// One resolution of an image. The upstream publishes a fixed ladder of
/// sizes; normalization only looks for 720×480 and 100×100.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawImageVariant {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawReviews {
    pub combined_average_rating: Option<f64>,
    pub total_reviews: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPricing {
    pub summary: Option<RawPriceSummary>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPriceSummary {
    /// Number or numeric string; see the module doc.
    pub from_price: Option<serde_json::Value>,
    pub from_price_before_discount: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDestinationRef {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub primary: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTranslationInfo {
    pub contains_machine_translated_text: Option<bool>,
}

/// One destination from the taxonomy endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDestination {
    pub destination_id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: Option<String>,
    pub parent_destination_id: Option<i64>,
    pub lookup_id: Option<String>,
    pub url: Option<String>,
    pub currency_code: Option<String>,
    pub time_zone: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub iata_codes: Vec<String>,
    pub center: Option<RawCenter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCenter {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// One product's availability calendar from the schedules endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAvailability {
    pub product_code: Option<String>,
    pub currency: Option<String>,
    pub summary: Option<RawPriceSummary>,
    #[serde(deserialize_with = "null_default")]
    pub bookable_items: Vec<RawBookableItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBookableItem {
    pub product_option_code: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub seasons: Vec<RawSeason>,
}

/// A contiguous date range within which a set of pricing records apply.
/// Both bounds are inclusive `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSeason {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub pricing_records: Vec<RawPricingRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPricingRecord {
    /// Uppercase weekday names (`"MONDAY"`, ...) this record applies to.
    #[serde(deserialize_with = "null_default")]
    pub days_of_week: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub timed_entries: Vec<RawTimedEntry>,
    #[serde(deserialize_with = "null_default")]
    pub pricing_details: Vec<RawPricingDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTimedEntry {
    /// `HH:MM` start time; absent for untimed entries.
    pub start_time: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub unavailable_dates: Vec<RawUnavailableDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawUnavailableDate {
    pub date: Option<String>,
    pub reason: Option<String>,
}

/// Pricing for one traveler age band (`"ADULT"`, `"CHILD"`, `"INFANT"`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPricingDetail {
    pub age_band: Option<String>,
    pub price: Option<RawPrice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPrice {
    pub original: Option<RawPriceBlock>,
    pub special: Option<RawPriceBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPriceBlock {
    /// Number or numeric string; see the module doc.
    pub recommended_retail_price: Option<serde_json::Value>,
    /// Only populated on `special` blocks, and only consumed for the adult
    /// age band.
    pub offer_end_date: Option<String>,
}

/// One location from the locations endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLocation {
    pub provider: Option<String>,
    pub reference: Option<String>,
    pub name: Option<String>,
    pub address: Option<RawAddress>,
    /// Free-form address used verbatim when no structured block exists.
    pub unstructured_address: Option<String>,
    pub center: Option<RawCenter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAddress {
    pub street: Option<String>,
    pub administrative_area: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}
