//! Length units accepted by the calculator.
//!
//! Unit strings arrive from selectors and from persisted JSON. They are parsed
//! into the closed [`LengthUnit`] enum at that boundary; anything outside the
//! four known tags is rejected with [`UnitError`] instead of being defaulted.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const INCHES_PER_FOOT: f64 = 12.0;
const CM_PER_INCH: f64 = 2.54;
const CM_PER_METER: f64 = 100.0;

/// Error returned when a unit string is not one of the known tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown length unit: {0:?} (expected ft, in, cm or m)")]
    Unknown(String),
}

/// A linear unit a dimension can be entered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
}

impl LengthUnit {
    /// Every unit, in selector order.
    pub const ALL: [Self; 4] = [Self::Feet, Self::Inches, Self::Centimeters, Self::Meters];

    /// Short tag used in storage and as the selector option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Meters => "m",
        }
    }

    /// Human-readable plural name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Feet => "Feet",
            Self::Inches => "Inches",
            Self::Centimeters => "Centimeters",
            Self::Meters => "Meters",
        }
    }

    /// Convert a length in this unit to feet.
    #[must_use]
    pub fn to_feet(self, value: f64) -> f64 {
        match self {
            Self::Feet => value,
            Self::Inches => value / INCHES_PER_FOOT,
            Self::Centimeters => value / CM_PER_INCH / INCHES_PER_FOOT,
            Self::Meters => (value * CM_PER_METER) / CM_PER_INCH / INCHES_PER_FOOT,
        }
    }

    /// Convert a length in feet to this unit. Inverse of [`LengthUnit::to_feet`].
    #[must_use]
    pub fn from_feet(self, feet: f64) -> f64 {
        match self {
            Self::Feet => feet,
            Self::Inches => feet * INCHES_PER_FOOT,
            Self::Centimeters => feet * INCHES_PER_FOOT * CM_PER_INCH,
            Self::Meters => feet * INCHES_PER_FOOT * CM_PER_INCH / CM_PER_METER,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ft" => Ok(Self::Feet),
            "in" => Ok(Self::Inches),
            "cm" => Ok(Self::Centimeters),
            "m" => Ok(Self::Meters),
            other => Err(UnitError::Unknown(other.to_owned())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
