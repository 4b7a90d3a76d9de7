//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the calculator form. They read the session's view signal
//! and report user intent back through the `Session` handle; none of them
//! owns calculator state.

pub mod dimension_panel;
pub mod install_prompt;
pub mod numeric_input;
pub mod pricing_panel;
pub mod total_panel;
