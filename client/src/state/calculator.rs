//! Render snapshot of the calculator session.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use calculate::{Axis, Calculator, Dimension, Field, PricingDetails, Quote, Storage};

/// Everything the page renders, copied out of the session after each change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorView {
    pub width: Dimension,
    pub height: Dimension,
    pub details: PricingDetails,
    /// Last committed total.
    pub total: u64,
    /// Breakdown for the current inputs.
    pub quote: Quote,
    /// A recompute is waiting for the debounce window to close.
    pub recompute_pending: bool,
}

impl CalculatorView {
    pub fn from_session<S: Storage>(calculator: &Calculator<S>) -> Self {
        Self {
            width: calculator.width().clone(),
            height: calculator.height().clone(),
            details: calculator.details().clone(),
            total: calculator.total(),
            quote: calculator.quote(),
            recompute_pending: calculator.is_recompute_pending(),
        }
    }

    pub fn dimension(&self, axis: Axis) -> &Dimension {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    /// Current text of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Width => self.width.value.as_str(),
            Field::Height => self.height.value.as_str(),
            Field::Quantity => self.details.quantity.as_str(),
            Field::PricePerSqft => self.details.price_per_sqft.as_str(),
        }
    }
}

/// The numeric field that holds an axis's length.
pub fn length_field(axis: Axis) -> Field {
    match axis {
        Axis::Width => Field::Width,
        Axis::Height => Field::Height,
    }
}
