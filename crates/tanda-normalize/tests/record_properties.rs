//! Cross-cutting properties over randomly-omitted optional fields: every
//! normalizer returns a schema-valid record without panicking, and
//! normalizing the same raw payload twice yields equal output.

use std::collections::HashSet;

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use tanda_normalize::types::{
    RawAddress, RawAvailability, RawBookableItem, RawCenter, RawDestination, RawDestinationRef,
    RawImage, RawImageVariant, RawLocation, RawPrice, RawPriceBlock, RawPriceSummary,
    RawPricing, RawPricingDetail, RawPricingRecord, RawProduct, RawReviews, RawSeason,
    RawTimedEntry, RawTranslationInfo, RawUnavailableDate,
};
use tanda_normalize::{
    normalize_availability, normalize_destination, normalize_location, normalize_product,
    CaptureSink,
};

fn opt_text() -> impl Strategy<Value = Option<String>> {
    option::of("[A-Za-z0-9 ]{0,12}")
}

/// A price leaf as the upstream sends it: number, numeric string, null, or
/// outright garbage.
fn price_leaf() -> impl Strategy<Value = Option<serde_json::Value>> {
    option::of(prop_oneof![
        (-10.0f64..5000.0).prop_map(|price| serde_json::json!(price)),
        "[0-9]{1,4}\\.[0-9]{2}".prop_map(serde_json::Value::String),
        Just(serde_json::Value::Null),
        Just(serde_json::json!("n/a")),
    ])
}

/// A date string within a bounded window (keeps season expansion cheap), or
/// garbage, or absent.
fn day_string() -> impl Strategy<Value = Option<String>> {
    option::of(prop_oneof![
        (0u64..120).prop_map(|offset| {
            let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
            (base + chrono::Days::new(offset))
                .format("%Y-%m-%d")
                .to_string()
        }),
        Just("not-a-date".to_string()),
    ])
}

prop_compose! {
    fn arb_image_variant()(
        width in option::of(prop_oneof![Just(720u32), Just(100u32), 1u32..2000]),
        height in option::of(prop_oneof![Just(480u32), Just(100u32), 1u32..2000]),
        url in opt_text(),
    ) -> RawImageVariant {
        RawImageVariant { width, height, url }
    }
}

prop_compose! {
    fn arb_image()(
        is_cover in option::of(any::<bool>()),
        variants in vec(arb_image_variant(), 0..4),
    ) -> RawImage {
        RawImage { is_cover, variants }
    }
}

prop_compose! {
    fn arb_summary()(
        from_price in price_leaf(),
        from_price_before_discount in price_leaf(),
    ) -> RawPriceSummary {
        RawPriceSummary { from_price, from_price_before_discount }
    }
}

prop_compose! {
    fn arb_product()(
        product_code in opt_text(),
        title in opt_text(),
        description in opt_text(),
        images in vec(arb_image(), 0..3),
        reviews in option::of((option::of(0.0f64..5.0), option::of(0i64..100_000))),
        summary in option::of(arb_summary()),
        currency in opt_text(),
        has_pricing in any::<bool>(),
        destinations in vec((opt_text(), option::of(any::<bool>())), 0..4),
        tags in vec(any::<i64>(), 0..4),
        flags in vec("[A-Z_]{1,12}", 0..3),
        product_url in opt_text(),
        translation in option::of(option::of(any::<bool>())),
    ) -> RawProduct {
        RawProduct {
            product_code,
            title,
            description,
            images,
            reviews: reviews.map(|(combined_average_rating, total_reviews)| RawReviews {
                combined_average_rating,
                total_reviews,
            }),
            pricing: has_pricing.then_some(RawPricing { summary, currency }),
            destinations: destinations
                .into_iter()
                .map(|(reference, primary)| RawDestinationRef { reference, primary })
                .collect(),
            tags,
            flags,
            product_url,
            translation_info: translation.map(|contains_machine_translated_text| {
                RawTranslationInfo { contains_machine_translated_text }
            }),
        }
    }
}

prop_compose! {
    fn arb_center()(
        latitude in option::of(prop_oneof![Just(0.0f64), -90.0f64..90.0]),
        longitude in option::of(prop_oneof![Just(0.0f64), -180.0f64..180.0]),
    ) -> RawCenter {
        RawCenter { latitude, longitude }
    }
}

prop_compose! {
    fn arb_destination()(
        destination_id in option::of(any::<i64>()),
        name in opt_text(),
        destination_type in opt_text(),
        parent_destination_id in option::of(any::<i64>()),
        lookup_id in opt_text(),
        url in opt_text(),
        currency_code in opt_text(),
        time_zone in opt_text(),
        iata_codes in vec("[A-Z]{3}", 0..3),
        center in option::of(arb_center()),
    ) -> RawDestination {
        RawDestination {
            destination_id,
            name,
            destination_type,
            parent_destination_id,
            lookup_id,
            url,
            currency_code,
            time_zone,
            iata_codes,
            center,
        }
    }
}

prop_compose! {
    fn arb_timed_entry()(
        start_time in option::of("[0-2][0-9]:[0-5][0-9]"),
        unavailable in vec((day_string(), opt_text()), 0..3),
    ) -> RawTimedEntry {
        RawTimedEntry {
            start_time,
            unavailable_dates: unavailable
                .into_iter()
                .map(|(date, reason)| RawUnavailableDate { date, reason })
                .collect(),
        }
    }
}

prop_compose! {
    fn arb_price_block()(
        recommended_retail_price in price_leaf(),
        offer_end_date in day_string(),
    ) -> RawPriceBlock {
        RawPriceBlock { recommended_retail_price, offer_end_date }
    }
}

prop_compose! {
    fn arb_pricing_detail()(
        age_band in option::of(
            prop::sample::select(vec!["ADULT", "CHILD", "INFANT", "SENIOR"])
                .prop_map(str::to_string)
        ),
        original in option::of(arb_price_block()),
        special in option::of(arb_price_block()),
        has_price in any::<bool>(),
    ) -> RawPricingDetail {
        RawPricingDetail {
            age_band,
            price: has_price.then_some(RawPrice { original, special }),
        }
    }
}

prop_compose! {
    fn arb_pricing_record()(
        days_of_week in vec(
            prop::sample::select(vec![
                "SUNDAY", "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY",
                "SATURDAY", "FUNDAY",
            ])
            .prop_map(str::to_string),
            0..4,
        ),
        timed_entries in vec(arb_timed_entry(), 0..3),
        pricing_details in vec(arb_pricing_detail(), 0..4),
    ) -> RawPricingRecord {
        RawPricingRecord { days_of_week, timed_entries, pricing_details }
    }
}

prop_compose! {
    fn arb_season()(
        start_date in day_string(),
        end_date in day_string(),
        pricing_records in vec(arb_pricing_record(), 0..3),
    ) -> RawSeason {
        RawSeason { start_date, end_date, pricing_records }
    }
}

prop_compose! {
    fn arb_availability()(
        product_code in opt_text(),
        currency in opt_text(),
        summary in option::of(arb_summary()),
        items in vec((opt_text(), vec(arb_season(), 0..3)), 0..3),
    ) -> RawAvailability {
        RawAvailability {
            product_code,
            currency,
            summary,
            bookable_items: items
                .into_iter()
                .map(|(product_option_code, seasons)| RawBookableItem {
                    product_option_code,
                    seasons,
                })
                .collect(),
        }
    }
}

prop_compose! {
    fn arb_location()(
        provider in opt_text(),
        reference in opt_text(),
        name in opt_text(),
        address in option::of((opt_text(), opt_text(), opt_text(), opt_text())),
        unstructured_address in opt_text(),
        center in option::of(arb_center()),
    ) -> RawLocation {
        RawLocation {
            provider,
            reference,
            name,
            address: address.map(|(street, administrative_area, state, country)| RawAddress {
                street,
                administrative_area,
                state,
                country,
            }),
            unstructured_address,
            center,
        }
    }
}

proptest! {
    #[test]
    fn product_is_schema_valid_and_idempotent(raw in arb_product()) {
        let sink = CaptureSink::new();
        let first = normalize_product(&raw, &sink);
        let second = normalize_product(&raw, &sink);
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.destination_ids.len(), raw.destinations.len());
        let json = serde_json::to_value(&first).expect("serialization failed");
        for key in [
            "productCode", "title", "description", "imageUrl", "thumbnailUrl", "price",
            "currency", "rating", "reviewCount", "destinationIds", "tags", "flags",
            "bookingUrl", "containsMachineTranslatedText",
        ] {
            prop_assert!(json.get(key).is_some(), "missing required key {}", key);
        }
        if first.original_price.is_none() {
            prop_assert!(json.get("originalPrice").is_none());
        }
    }

    #[test]
    fn destination_is_schema_valid_and_idempotent(raw in arb_destination()) {
        let sink = CaptureSink::new();
        let first = normalize_destination(&raw, &sink);
        let second = normalize_destination(&raw, &sink);
        prop_assert_eq!(&first, &second);

        if let Some(point) = first.coordinates {
            prop_assert!(point.latitude != 0.0);
            prop_assert!(point.longitude != 0.0);
        }
        prop_assert_eq!(first.destination_id, raw.destination_id.unwrap_or(0));
    }

    #[test]
    fn availability_dates_are_canonical_and_deduplicated(raw in arb_availability()) {
        let sink = CaptureSink::new();
        let first = normalize_availability(&raw, &sink);
        let second = normalize_availability(&raw, &CaptureSink::new());
        prop_assert_eq!(&first, &second);

        let degraded = sink
            .take()
            .iter()
            .any(|event| event.operation == "normalize_availability");
        if degraded {
            prop_assert!(!first.available);
            prop_assert!(first.options.is_empty());
        } else {
            prop_assert_eq!(first.available, !first.options.is_empty());
            prop_assert_eq!(first.options.len(), raw.bookable_items.len());
        }

        for option in &first.options {
            for date in option.available_dates.iter().chain(&option.unavailable_dates) {
                prop_assert!(
                    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(),
                    "non-canonical date {}",
                    date
                );
            }
            let unique_available: HashSet<_> = option.available_dates.iter().collect();
            prop_assert_eq!(unique_available.len(), option.available_dates.len());
            let unique_unavailable: HashSet<_> = option.unavailable_dates.iter().collect();
            prop_assert_eq!(unique_unavailable.len(), option.unavailable_dates.len());

            for (date, times) in &option.start_times {
                // A start time is only recorded alongside a classification
                // for the same date.
                prop_assert!(
                    option.available_dates.contains(date)
                        || option.unavailable_dates.contains(date)
                );
                prop_assert!(!times.is_empty());
                let unique_times: HashSet<_> = times.iter().collect();
                prop_assert_eq!(unique_times.len(), times.len());
            }
        }
    }

    #[test]
    fn location_address_is_never_empty(raw in arb_location()) {
        let sink = CaptureSink::new();
        let first = normalize_location(&raw, &sink);
        let second = normalize_location(&raw, &sink);
        prop_assert_eq!(&first, &second);

        if let Some(address) = &first.address {
            prop_assert!(!address.is_empty());
        }
        if let Some(point) = first.coordinates {
            prop_assert!(point.latitude != 0.0);
            prop_assert!(point.longitude != 0.0);
        }
    }
}
