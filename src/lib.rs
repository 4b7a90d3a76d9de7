//! Core of the unit-converting price calculator.
//!
//! A user enters a width and a height in feet, inches, centimeters or meters,
//! a quantity and a price per square foot. The calculator converts both sides
//! to feet, multiplies everything out and floors the result into a total.
//! Fields persist in client-local storage between sessions.
//!
//! This crate has no UI and no platform dependencies; the `client` crate wires
//! it to the browser (`localStorage`, timers, clipboard).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`units`] | Closed [`units::LengthUnit`] enum and feet conversions |
//! | [`numeric`] | Input validation and text-to-number coercion |
//! | [`model`] | Persisted field shapes ([`model::Dimension`], [`model::PricingDetails`]) |
//! | [`engine`] | Pure conversion and total computation |
//! | [`store`] | [`store::FieldStore`] over a pluggable [`store::Storage`] backend |
//! | [`debounce`] | Single-slot quiescence timer with tickets |
//! | [`calculator`] | Session that ties the pieces together |
//! | [`config`] | Tuning knobs (debounce window) |

pub mod calculator;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod model;
pub mod numeric;
pub mod store;
pub mod units;

pub use calculator::{Calculator, Inputs};
pub use config::CalculatorConfig;
pub use debounce::{Scheduled, Ticket};
pub use engine::{Quote, compute_total, quote, to_feet};
pub use model::{Axis, Dimension, Field, PricingDetails};
pub use numeric::{NumericText, ValidationError, to_number, validate};
pub use store::{FieldStore, MemoryStorage, Storage, StorageError};
pub use units::{LengthUnit, UnitError};
