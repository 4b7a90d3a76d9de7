//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern behind a plain Rust API. Browser
//! calls only exist in `csr` builds; native builds (tests) get inert fallbacks
//! so pages and components stay testable off the browser.

pub mod browser_storage;
pub mod clipboard;
pub mod clock;
pub mod format;
pub mod platform;
pub mod timer;
