//! Clipboard writes.

/// Copy `text` to the system clipboard.
///
/// Returns `true` when the write was handed to the browser. The browser
/// completes it asynchronously.
pub fn write_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        // `navigator.clipboard` is missing on insecure origins and old browsers.
        let clipboard = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("clipboard")).ok())
            .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok());
        if let Some(clipboard) = clipboard {
            let _ = clipboard.write_text(text);
            return true;
        }
        log::warn!("clipboard API unavailable");
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
