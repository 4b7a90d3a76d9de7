//! Reactive handle around the calculator session.
//!
//! ARCHITECTURE
//! ============
//! The core `Calculator` and the browser timeout are not `Send`, so both live
//! in local arena slots (`StoredValue::new_local`). The handle itself is `Copy`
//! and can be captured by any callback. After every mutation the session
//! publishes a fresh [`CalculatorView`] on its signal.
//!
//! Each edit re-arms the single recompute timeout. The replaced `gloo_timers`
//! handle is dropped (cancelling it) and any callback that still slips through
//! presents a superseded ticket, which the core ignores.

use calculate::{Axis, Calculator, CalculatorConfig, Field, NumericText, Scheduled, Ticket};
use leptos::prelude::*;

use crate::state::calculator::CalculatorView;
use crate::util::browser_storage::BrowserStorage;
use crate::util::clock::now_ms;
use crate::util::timer::TimerSlot;

#[derive(Clone, Copy)]
pub struct Session {
    calculator: StoredValue<Calculator<BrowserStorage>, LocalStorage>,
    timer: StoredValue<TimerSlot, LocalStorage>,
    view: RwSignal<CalculatorView>,
}

impl Session {
    /// Open the session against `localStorage` and publish its first snapshot.
    pub fn open(config: CalculatorConfig) -> Self {
        let calculator = Calculator::open(BrowserStorage, config);
        let view = RwSignal::new(CalculatorView::from_session(&calculator));
        Self {
            calculator: StoredValue::new_local(calculator),
            timer: StoredValue::new_local(TimerSlot::default()),
            view,
        }
    }

    pub fn view(self) -> ReadSignal<CalculatorView> {
        self.view.read_only()
    }

    /// Commit an accepted field value.
    pub fn edit(self, field: Field, text: NumericText) {
        let scheduled = self
            .calculator
            .try_update_value(|calc| calc.set_value(field, text, now_ms()));
        self.after_change(scheduled);
    }

    /// Apply a unit picked in a selector. Unknown units are logged and dropped.
    pub fn change_unit(self, axis: Axis, unit: &str) {
        let result = self
            .calculator
            .try_update_value(|calc| calc.set_unit(axis, unit, now_ms()));
        match result {
            Some(Ok(scheduled)) => self.after_change(Some(scheduled)),
            Some(Err(e)) => log::warn!("ignoring unit change: {e}"),
            None => {}
        }
    }

    /// The committed total as plain text.
    pub fn clipboard_text(self) -> String {
        self.calculator
            .try_with_value(Calculator::clipboard_text)
            .unwrap_or_default()
    }

    /// Cancel a pending recompute timeout (the edits are already stored).
    pub fn shutdown(self) {
        self.timer.update_value(TimerSlot::clear);
    }

    fn after_change(self, scheduled: Option<Scheduled>) {
        let Some(scheduled) = scheduled else {
            return;
        };
        self.publish();
        self.timer.update_value(|slot| {
            slot.arm(scheduled.delay_ms, move || self.fire(scheduled.ticket));
        });
    }

    fn fire(self, ticket: Ticket) {
        let committed = self.calculator.try_update_value(|calc| calc.fire(ticket));
        if let Some(Some(total)) = committed {
            log::debug!("total recomputed: {total}");
            self.publish();
        }
    }

    fn publish(self) {
        if let Some(snapshot) = self.calculator.try_with_value(CalculatorView::from_session) {
            self.view.set(snapshot);
        }
    }
}
