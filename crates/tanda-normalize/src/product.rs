//! Normalization of raw catalog products into [`NormalizedProduct`].

use tanda_core::NormalizedProduct;

use crate::diag::DiagnosticSink;
use crate::error::NormalizeError;
use crate::helpers::{parse_price, price_value};
use crate::types::{RawImage, RawProduct};

const UNKNOWN_TITLE: &str = "Unknown Title";
const DEFAULT_CURRENCY: &str = "USD";

/// Resolution of the main product image on the upstream variant ladder.
const MAIN_IMAGE: (u32, u32) = (720, 480);
/// Resolution of the thumbnail on the upstream variant ladder.
const THUMBNAIL: (u32, u32) = (100, 100);

/// Normalizes a raw catalog product. Never fails visibly: internal errors
/// are reported through `diag` and degrade to a fallback record carrying the
/// original product code and title when available.
pub fn normalize_product(raw: &RawProduct, diag: &dyn DiagnosticSink) -> NormalizedProduct {
    match build_product(raw) {
        Ok(record) => record,
        Err(error) => {
            diag.failure("normalize_product", &error.to_string());
            NormalizedProduct::fallback(
                raw.product_code.clone().unwrap_or_default(),
                raw.title.clone(),
            )
        }
    }
}

#[allow(clippy::unnecessary_wraps)] // failure boundary kept uniform across normalizers
fn build_product(raw: &RawProduct) -> Result<NormalizedProduct, NormalizeError> {
    let cover = cover_image(&raw.images);
    let summary = raw.pricing.as_ref().and_then(|pricing| pricing.summary.as_ref());

    Ok(NormalizedProduct {
        product_code: raw.product_code.clone().unwrap_or_default(),
        title: raw
            .title
            .clone()
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        description: raw.description.clone().unwrap_or_default(),
        image_url: variant_url(cover, MAIN_IMAGE),
        thumbnail_url: variant_url(cover, THUMBNAIL),
        price: parse_price(summary.and_then(|s| s.from_price.as_ref()), 0.0),
        // Absent stays absent so callers can tell "no discount data" from
        // "zero".
        original_price: price_value(summary.and_then(|s| s.from_price_before_discount.as_ref())),
        currency: raw
            .pricing
            .as_ref()
            .and_then(|pricing| pricing.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        rating: raw
            .reviews
            .as_ref()
            .and_then(|reviews| reviews.combined_average_rating)
            .unwrap_or(0.0),
        review_count: raw
            .reviews
            .as_ref()
            .and_then(|reviews| reviews.total_reviews)
            .unwrap_or(0),
        destination_ids: raw
            .destinations
            .iter()
            .map(|destination| destination.reference.clone().unwrap_or_default())
            .collect(),
        primary_destination_id: raw
            .destinations
            .iter()
            .find(|destination| destination.primary == Some(true))
            .and_then(|destination| destination.reference.clone()),
        tags: raw.tags.clone(),
        flags: raw.flags.clone(),
        booking_url: raw.product_url.clone().unwrap_or_default(),
        contains_machine_translated_text: raw
            .translation_info
            .as_ref()
            .and_then(|info| info.contains_machine_translated_text)
            .unwrap_or(false),
    })
}

/// The image flagged as cover, or else the first image in the list.
fn cover_image(images: &[RawImage]) -> Option<&RawImage> {
    images
        .iter()
        .find(|image| image.is_cover == Some(true))
        .or_else(|| images.first())
}

/// URL of the variant matching `resolution` exactly, or `""` — the record
/// schema requires a string here, not an optional.
fn variant_url(image: Option<&RawImage>, resolution: (u32, u32)) -> String {
    image
        .and_then(|image| {
            image.variants.iter().find(|variant| {
                variant.width == Some(resolution.0) && variant.height == Some(resolution.1)
            })
        })
        .and_then(|variant| variant.url.clone())
        .unwrap_or_default()
}
