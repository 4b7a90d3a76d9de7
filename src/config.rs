//! Calculator tuning.

use std::time::Duration;

/// Quiescence window between the last edit and the committed recompute.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Delay after the last change before the total is recomputed.
    pub debounce: Duration,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl CalculatorConfig {
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
