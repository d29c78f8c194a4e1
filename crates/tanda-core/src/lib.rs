//! Normalized record types for the tours-and-activities data layer.
//!
//! These are the trusted shapes the rest of the system consumes: every
//! required field is always populated (with a documented default when the
//! upstream payload was missing data) and optional fields are absent rather
//! than null on the wire. Construction happens in `tanda-normalize`; this
//! crate only defines the records, their fallback constructors, and small
//! record-level helpers.

pub mod availability;
pub mod destination;
pub mod location;
pub mod product;

pub use availability::{
    AdultPricing, BandPricing, NormalizedAvailability, NormalizedOption,
};
pub use destination::{Coordinates, NormalizedDestination};
pub use location::NormalizedLocation;
pub use product::NormalizedProduct;
