//! Calculator session: the single owner of field state.
//!
//! ARCHITECTURE
//! ============
//! The presentation layer validates raw text with [`crate::numeric::validate`]
//! and hands accepted values to [`Calculator::set_value`]. Each edit is
//! persisted immediately and schedules a recompute on the [`Debouncer`]. When
//! the host's timer fires (or its tick reaches the due time) the newest input
//! snapshot is priced and `total` is written. No other path writes `total`.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::debounce::{Debouncer, Scheduled, Ticket};
use crate::engine::{Quote, quote};
use crate::model::{Axis, Dimension, Field, PricingDetails};
use crate::numeric::NumericText;
use crate::store::{FieldStore, Storage, keys};
use crate::units::{LengthUnit, UnitError};

/// Snapshot of everything the total depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inputs {
    pub width: Dimension,
    pub height: Dimension,
    pub details: PricingDetails,
}

impl Inputs {
    #[must_use]
    pub fn quote(&self) -> Quote {
        quote(&self.width, &self.height, &self.details)
    }
}

/// Persisted calculator state plus the pending recompute.
#[derive(Debug)]
pub struct Calculator<S> {
    store: FieldStore<S>,
    inputs: Inputs,
    total: u64,
    recompute: Debouncer<Inputs>,
}

impl<S: Storage> Calculator<S> {
    /// Load persisted fields from `storage` and bring `total` up to date.
    ///
    /// Missing or unreadable fields start from their defaults. The total is
    /// recomputed right away; it is only written back when it differs from the
    /// stored one, so an untouched session leaves storage empty.
    pub fn open(storage: S, config: CalculatorConfig) -> Self {
        let mut store = FieldStore::new(storage);
        let inputs = Inputs {
            width: store.get(keys::WIDTH, Dimension::default()),
            height: store.get(keys::HEIGHT, Dimension::default()),
            details: store.get(keys::DETAILS, PricingDetails::default()),
        };
        let stored_total = store.get(keys::TOTAL, 0_u64);
        let fresh_total = inputs.quote().total;
        if fresh_total != stored_total {
            debug!(stored_total, fresh_total, "stored total was stale");
            store.set(keys::TOTAL, &fresh_total);
        }

        Self {
            store,
            inputs,
            total: fresh_total,
            recompute: Debouncer::new(config.debounce),
        }
    }

    // --- Edits ---

    /// Commit a validated value for `field` and schedule a recompute.
    pub fn set_value(&mut self, field: Field, text: NumericText, now_ms: u64) -> Scheduled {
        match field {
            Field::Width => {
                self.inputs.width.value = text;
                self.store.set(keys::WIDTH, &self.inputs.width);
            }
            Field::Height => {
                self.inputs.height.value = text;
                self.store.set(keys::HEIGHT, &self.inputs.height);
            }
            Field::Quantity => {
                self.inputs.details.quantity = text;
                self.store.set(keys::DETAILS, &self.inputs.details);
            }
            Field::PricePerSqft => {
                self.inputs.details.price_per_sqft = text;
                self.store.set(keys::DETAILS, &self.inputs.details);
            }
        }
        self.schedule(now_ms)
    }

    /// Parse `unit` and apply it to `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unknown`] for anything other than `ft`, `in`,
    /// `cm` or `m`. The dimension is left unchanged and nothing is scheduled.
    pub fn set_unit(&mut self, axis: Axis, unit: &str, now_ms: u64) -> Result<Scheduled, UnitError> {
        let unit = unit.parse::<LengthUnit>().inspect_err(|e| {
            warn!(?axis, error = %e, "unit change rejected");
        })?;
        Ok(self.set_length_unit(axis, unit, now_ms))
    }

    /// Apply an already-parsed unit to `axis` and schedule a recompute.
    pub fn set_length_unit(&mut self, axis: Axis, unit: LengthUnit, now_ms: u64) -> Scheduled {
        match axis {
            Axis::Width => {
                self.inputs.width.unit = unit;
                self.store.set(keys::WIDTH, &self.inputs.width);
            }
            Axis::Height => {
                self.inputs.height.unit = unit;
                self.store.set(keys::HEIGHT, &self.inputs.height);
            }
        }
        self.schedule(now_ms)
    }

    fn schedule(&mut self, now_ms: u64) -> Scheduled {
        let scheduled = self.recompute.schedule(now_ms, self.inputs.clone());
        debug!(
            ticket = ?scheduled.ticket,
            due_ms = scheduled.due_ms,
            superseded = ?scheduled.superseded,
            "recompute scheduled"
        );
        scheduled
    }

    // --- Recompute ---

    /// Timer callback: commit the recompute for `ticket` if it is still current.
    ///
    /// Returns the committed total, or `None` for a superseded ticket.
    pub fn fire(&mut self, ticket: Ticket) -> Option<u64> {
        let inputs = self.recompute.fire(ticket)?;
        Some(self.commit(&inputs))
    }

    /// Tick-driven alternative to [`Calculator::fire`].
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        let inputs = self.recompute.poll(now_ms)?;
        Some(self.commit(&inputs))
    }

    #[must_use]
    pub fn is_recompute_pending(&self) -> bool {
        self.recompute.is_pending()
    }

    fn commit(&mut self, inputs: &Inputs) -> u64 {
        let total = inputs.quote().total;
        self.total = total;
        self.store.set(keys::TOTAL, &total);
        debug!(total, "total committed");
        total
    }

    // --- Reads ---

    #[must_use]
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    #[must_use]
    pub fn width(&self) -> &Dimension {
        &self.inputs.width
    }

    #[must_use]
    pub fn height(&self) -> &Dimension {
        &self.inputs.height
    }

    #[must_use]
    pub fn details(&self) -> &PricingDetails {
        &self.inputs.details
    }

    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &NumericText {
        match field {
            Field::Width => &self.inputs.width.value,
            Field::Height => &self.inputs.height.value,
            Field::Quantity => &self.inputs.details.quantity,
            Field::PricePerSqft => &self.inputs.details.price_per_sqft,
        }
    }

    /// Last committed total.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Breakdown for the current inputs. During a burst of edits this runs
    /// ahead of [`Calculator::total`], which catches up on commit.
    #[must_use]
    pub fn quote(&self) -> Quote {
        self.inputs.quote()
    }

    /// The committed total as plain text for the clipboard.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.total.to_string()
    }

    #[must_use]
    pub fn store(&self) -> &FieldStore<S> {
        &self.store
    }
}
