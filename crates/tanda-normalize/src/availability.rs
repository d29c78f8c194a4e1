//! Expansion of raw multi-season availability calendars into
//! [`NormalizedAvailability`] records.
//!
//! Each bookable item's seasons are walked day by day over their closed date
//! interval; pricing records apply by weekday name, and each timed entry
//! contributes a start time plus an available/unavailable classification for
//! the date. Classification is per timed entry, so entries that disagree
//! leave a date in *both* output lists — an upstream ambiguity that is
//! deliberately preserved (see `NormalizedOption::is_ambiguous_on`).

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use tanda_core::{AdultPricing, BandPricing, NormalizedAvailability, NormalizedOption};

use crate::diag::DiagnosticSink;
use crate::error::NormalizeError;
use crate::helpers::{format_date, parse_price, price_value, DATE_FORMAT};
use crate::types::{RawAvailability, RawBookableItem, RawPricingDetail, RawSeason};

const DEFAULT_CURRENCY: &str = "USD";

/// Cap on the number of days a single season may span (~10 years). Longer
/// spans indicate corrupt upstream data and abort through the failure
/// boundary rather than expanding an unbounded calendar.
const MAX_SEASON_DAYS: i64 = 3_660;

/// Normalizes a raw availability calendar. Never fails visibly: internal
/// errors are reported through `diag` and degrade to a fallback record
/// (empty options, `available: false`) carrying the original product code.
pub fn normalize_availability(
    raw: &RawAvailability,
    diag: &dyn DiagnosticSink,
) -> NormalizedAvailability {
    match build_availability(raw, diag) {
        Ok(record) => record,
        Err(error) => {
            diag.failure("normalize_availability", &error.to_string());
            NormalizedAvailability::fallback(raw.product_code.clone().unwrap_or_default())
        }
    }
}

fn build_availability(
    raw: &RawAvailability,
    diag: &dyn DiagnosticSink,
) -> Result<NormalizedAvailability, NormalizeError> {
    let options = raw
        .bookable_items
        .iter()
        .map(|item| expand_item(item, diag))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = raw.summary.as_ref();

    Ok(NormalizedAvailability {
        product_code: raw.product_code.clone().unwrap_or_default(),
        // Existence check, not a calendar check: an option with zero
        // bookable dates still counts as available.
        available: !options.is_empty(),
        lowest_price: parse_price(summary.and_then(|s| s.from_price.as_ref()), 0.0),
        original_price: price_value(summary.and_then(|s| s.from_price_before_discount.as_ref())),
        currency: raw
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        options,
    })
}

/// Ordered, deduplicated accumulation state for one bookable item.
#[derive(Default)]
struct Expansion {
    available: Vec<String>,
    unavailable: Vec<String>,
    seen_available: HashSet<String>,
    seen_unavailable: HashSet<String>,
    start_times: BTreeMap<String, Vec<String>>,
}

fn expand_item(
    item: &RawBookableItem,
    diag: &dyn DiagnosticSink,
) -> Result<NormalizedOption, NormalizeError> {
    let mut expansion = Expansion::default();
    for season in &item.seasons {
        expand_season(season, &mut expansion)?;
    }

    // Only the first season's first pricing record is consulted for age-band
    // pricing; that record's details carry one entry per band.
    let details = item
        .seasons
        .first()
        .and_then(|season| season.pricing_records.first())
        .map_or(&[][..], |record| record.pricing_details.as_slice());

    Ok(NormalizedOption {
        product_option_code: item.product_option_code.clone().unwrap_or_default(),
        available_dates: expansion.available,
        unavailable_dates: expansion.unavailable,
        start_times: expansion.start_times,
        adult: adult_pricing(find_band(details, "ADULT"), diag),
        child: find_band(details, "CHILD").map(band_pricing),
        infant: find_band(details, "INFANT").map(band_pricing),
    })
}

fn expand_season(season: &RawSeason, out: &mut Expansion) -> Result<(), NormalizeError> {
    // Missing or unparseable bounds mean zero iterations for the season,
    // matching the observed upstream behavior. Same for end < start.
    let Some(start) = season.start_date.as_deref().and_then(parse_day) else {
        tracing::debug!(start_date = ?season.start_date, "season start unparseable, skipping");
        return Ok(());
    };
    let Some(end) = season.end_date.as_deref().and_then(parse_day) else {
        tracing::debug!(end_date = ?season.end_date, "season end unparseable, skipping");
        return Ok(());
    };
    if end < start {
        return Ok(());
    }

    let days = (end - start).num_days() + 1;
    if days > MAX_SEASON_DAYS {
        return Err(NormalizeError::SeasonSpan {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
            days,
            cap: MAX_SEASON_DAYS,
        });
    }

    let mut date = start;
    loop {
        let date_str = date.format(DATE_FORMAT).to_string();
        let weekday = weekday_name(date);

        for record in season
            .pricing_records
            .iter()
            .filter(|record| record.days_of_week.iter().any(|day| day == weekday))
        {
            for entry in &record.timed_entries {
                if let Some(time) = entry.start_time.as_deref() {
                    let times = out.start_times.entry(date_str.clone()).or_default();
                    if !times.iter().any(|existing| existing == time) {
                        times.push(time.to_string());
                    }
                }

                // Exact date-string membership in this entry's blackout list
                // decides the classification for this entry.
                let unavailable = entry
                    .unavailable_dates
                    .iter()
                    .any(|blackout| blackout.date.as_deref() == Some(date_str.as_str()));
                if unavailable {
                    push_unique(&mut out.unavailable, &mut out.seen_unavailable, &date_str);
                } else {
                    push_unique(&mut out.available, &mut out.seen_available, &date_str);
                }
            }
        }

        if date == end {
            break;
        }
        date = date
            .succ_opt()
            .ok_or(NormalizeError::DateOverflow { date: date_str })?;
    }

    Ok(())
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "SUNDAY",
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
    }
}

fn push_unique(list: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
    if seen.insert(value.to_string()) {
        list.push(value.to_string());
    }
}

fn find_band<'a>(details: &'a [RawPricingDetail], band: &str) -> Option<&'a RawPricingDetail> {
    details
        .iter()
        .find(|detail| detail.age_band.as_deref() == Some(band))
}

/// Adult tier is always emitted; with no `ADULT` band in the source it is
/// zeroed rather than absent.
fn adult_pricing(detail: Option<&RawPricingDetail>, diag: &dyn DiagnosticSink) -> AdultPricing {
    let Some(detail) = detail else {
        return AdultPricing::default();
    };
    let price = detail.price.as_ref();
    let original = price.and_then(|p| p.original.as_ref());
    let special = price.and_then(|p| p.special.as_ref());

    AdultPricing {
        price: parse_price(original.and_then(|block| block.recommended_retail_price.as_ref()), 0.0),
        special_price: price_value(
            special.and_then(|block| block.recommended_retail_price.as_ref()),
        ),
        special_price_end_date: format_date(
            special.and_then(|block| block.offer_end_date.as_deref()),
            None,
            diag,
        ),
    }
}

fn band_pricing(detail: &RawPricingDetail) -> BandPricing {
    let price = detail.price.as_ref();
    let original = price.and_then(|p| p.original.as_ref());
    let special = price.and_then(|p| p.special.as_ref());

    BandPricing {
        price: parse_price(original.and_then(|block| block.recommended_retail_price.as_ref()), 0.0),
        special_price: price_value(
            special.and_then(|block| block.recommended_retail_price.as_ref()),
        ),
    }
}
