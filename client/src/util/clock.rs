//! Wall-clock milliseconds for the recompute debouncer.

/// Milliseconds since the Unix epoch in the browser, `0` elsewhere.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
