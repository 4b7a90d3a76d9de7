//! Single-slot browser timeout.
//!
//! Arming a [`TimerSlot`] drops the previous `gloo_timers` handle, which
//! clears its timeout, so at most one callback per slot is ever pending.

/// Holds the most recently armed timeout.
#[derive(Default)]
pub struct TimerSlot {
    #[cfg(feature = "csr")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl TimerSlot {
    /// Run `callback` after `delay_ms`, cancelling whatever was armed before.
    pub fn arm<F>(&mut self, delay_ms: u64, callback: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "csr")]
        {
            let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
            self.pending = Some(gloo_timers::callback::Timeout::new(delay, callback));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel the pending timeout, if any.
    pub fn clear(&mut self) {
        #[cfg(feature = "csr")]
        {
            self.pending = None;
        }
    }
}
