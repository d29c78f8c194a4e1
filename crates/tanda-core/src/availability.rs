use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-product availability and pricing, expanded from the upstream
/// multi-season calendar into per-date lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAvailability {
    pub product_code: String,
    /// True iff at least one bookable option was produced. This is an
    /// existence check, not a calendar check: an option with zero bookable
    /// dates still counts.
    pub available: bool,
    /// Lowest advertised price from the upstream summary block, independent
    /// of the per-option pricing tiers.
    pub lowest_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub currency: String,
    pub options: Vec<NormalizedOption>,
}

impl NormalizedAvailability {
    /// Minimal valid record returned when normalization fails internally.
    #[must_use]
    pub fn fallback(product_code: String) -> Self {
        Self {
            product_code,
            available: false,
            lowest_price: 0.0,
            original_price: None,
            currency: "USD".to_string(),
            options: Vec::new(),
        }
    }
}

/// One bookable option ("bookable item") of a product.
///
/// Date lists are deduplicated in first-seen order. A date can appear in
/// *both* lists when two timed entries disagree about it; that ambiguity
/// comes from the upstream feed and is preserved, not resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOption {
    pub product_option_code: String,
    /// `YYYY-MM-DD` dates with at least one bookable timed entry.
    pub available_dates: Vec<String>,
    /// `YYYY-MM-DD` dates explicitly listed as unavailable by at least one
    /// timed entry.
    pub unavailable_dates: Vec<String>,
    /// Start times per date, first-seen order, no duplicates. `BTreeMap`
    /// keeps serialization order deterministic.
    pub start_times: BTreeMap<String, Vec<String>>,
    /// Adult pricing tier; always present, zeroed when the source had no
    /// `ADULT` age band.
    pub adult: AdultPricing,
    /// Present only when the source pricing details carry a `CHILD` band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<BandPricing>,
    /// Present only when the source pricing details carry an `INFANT` band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infant: Option<BandPricing>,
}

impl NormalizedOption {
    /// Returns `true` when `date` landed in both the available and the
    /// unavailable list — the upstream conflict callers may want to surface.
    #[must_use]
    pub fn is_ambiguous_on(&self, date: &str) -> bool {
        self.available_dates.iter().any(|d| d == date)
            && self.unavailable_dates.iter().any(|d| d == date)
    }

    /// Start times recorded for `date`, empty when none.
    #[must_use]
    pub fn start_times_on(&self, date: &str) -> &[String] {
        self.start_times.get(date).map_or(&[], Vec::as_slice)
    }
}

/// Adult pricing tier. The special-offer end date is only tracked for the
/// adult band upstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultPricing {
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_price_end_date: Option<String>,
}

/// Child or infant pricing tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPricing {
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_price: Option<f64>,
}
