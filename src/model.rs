//! Persisted calculator inputs.
//!
//! The JSON shapes here are the storage layout: `w`/`h` hold a [`Dimension`]
//! (`{"value": "12", "unit": "ft"}`) and `details` holds [`PricingDetails`]
//! (`{"qty": "1", "sqft": "20"}`).

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::numeric::NumericText;
use crate::units::LengthUnit;

/// One side of the priced area, as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: NumericText,
    pub unit: LengthUnit,
}

impl Dimension {
    #[must_use]
    pub fn new(value: NumericText, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Length in feet, with the value coerced per [`crate::numeric::to_number`].
    #[must_use]
    pub fn feet(&self) -> f64 {
        self.unit.to_feet(self.value.to_number())
    }

    /// This length expressed in every unit, in [`LengthUnit::ALL`] order.
    #[must_use]
    pub fn equivalents(&self) -> [(LengthUnit, f64); 4] {
        let feet = self.feet();
        LengthUnit::ALL.map(|unit| (unit, unit.from_feet(feet)))
    }
}

/// Quantity and unit price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingDetails {
    #[serde(rename = "qty")]
    pub quantity: NumericText,
    #[serde(rename = "sqft")]
    pub price_per_sqft: NumericText,
}

impl Default for PricingDetails {
    fn default() -> Self {
        Self {
            quantity: NumericText::from_static("1"),
            price_per_sqft: NumericText::from_static("20"),
        }
    }
}

/// Which of the two dimensions a unit change applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

/// An editable numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Quantity,
    PricePerSqft,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Width, Self::Height, Self::Quantity, Self::PricePerSqft];
}
