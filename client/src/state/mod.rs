//! Client-side calculator state.
//!
//! DESIGN
//! ======
//! [`session::Session`] owns the core `Calculator` and its pending timer and is
//! the only writer. Components read the [`calculator::CalculatorView`] snapshot
//! it publishes through a signal.

pub mod calculator;
pub mod session;
