//! Conversion and total engine.
//!
//! Both dimensions are normalized to feet (the canonical unit) before they are
//! multiplied. The total is the floored product of area, quantity and price per
//! square foot. Every function here is pure; scheduling lives in
//! [`crate::debounce`] and persistence in [`crate::store`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::model::{Dimension, PricingDetails};
use crate::numeric::to_number;
use crate::units::LengthUnit;

/// Convert a text value in `unit` to feet. Unparsable text counts as zero.
#[must_use]
pub fn to_feet(value: &str, unit: LengthUnit) -> f64 {
    unit.to_feet(to_number(value))
}

/// `floor(width_ft * height_ft * quantity * price_per_sqft)`.
#[must_use]
pub fn compute_total(width: &Dimension, height: &Dimension, details: &PricingDetails) -> u64 {
    quote(width, height, details).total
}

/// Breakdown of a computed total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quote {
    pub width_ft: f64,
    pub height_ft: f64,
    pub area_sqft: f64,
    pub quantity: f64,
    pub price_per_sqft: f64,
    pub total: u64,
}

/// Compute the total along with the intermediate values that produced it.
#[must_use]
pub fn quote(width: &Dimension, height: &Dimension, details: &PricingDetails) -> Quote {
    let width_ft = to_feet(&width.value, width.unit);
    let height_ft = to_feet(&height.value, height.unit);
    let quantity = to_number(&details.quantity);
    let price_per_sqft = to_number(&details.price_per_sqft);
    let area_sqft = width_ft * height_ft;

    Quote {
        width_ft,
        height_ft,
        area_sqft,
        quantity,
        price_per_sqft,
        total: floor_to_u64(area_sqft * quantity * price_per_sqft),
    }
}

/// Float-to-int `as` casts saturate, and NaN maps to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_to_u64(value: f64) -> u64 {
    value.floor() as u64
}
