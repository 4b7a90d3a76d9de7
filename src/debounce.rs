//! Debounced recompute scheduling.
//!
//! DESIGN
//! ======
//! [`Debouncer`] holds at most one pending payload. Every [`Debouncer::schedule`]
//! supersedes the previous payload and issues a fresh [`Ticket`]; a timer
//! callback presents its ticket to [`Debouncer::fire`] and only the newest
//! ticket yields anything. Hosts that tick instead of arming timers call
//! [`Debouncer::poll`] with the current time.
//!
//! TRADE-OFFS
//! ==========
//! Time is passed in as milliseconds rather than read from a clock. That keeps
//! the state machine deterministic in tests and usable on `wasm32`, where
//! `std::time::Instant` is unavailable.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Identifies one scheduled payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Result of scheduling a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: Ticket,
    /// Time, in host milliseconds, at which the payload becomes due.
    pub due_ms: u64,
    /// Milliseconds to wait before firing.
    pub delay_ms: u64,
    /// Ticket of the payload this one replaced, if any.
    pub superseded: Option<Ticket>,
}

#[derive(Debug)]
struct Pending<T> {
    ticket: Ticket,
    due_ms: u64,
    payload: T,
}

/// Single-slot quiescence timer.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    issued: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            issued: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the pending payload, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Replace any pending payload with `payload`, due `delay` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, payload: T) -> Scheduled {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        let due_ms = now_ms.saturating_add(self.delay_ms);
        let superseded = self
            .pending
            .replace(Pending {
                ticket,
                due_ms,
                payload,
            })
            .map(|old| old.ticket);
        Scheduled {
            ticket,
            due_ms,
            delay_ms: self.delay_ms,
            superseded,
        }
    }

    /// Take the pending payload if `ticket` is still the newest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if self.pending_ticket() != Some(ticket) {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }

    /// Take the pending payload if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Drop the pending payload without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }
}
