//! Copying inspector output (selectors, attribute values) to the system
//! clipboard via the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard. Errors are ignored; the copy button
/// is best-effort.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
        }
    });
}
