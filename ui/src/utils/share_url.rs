//! Address-bar synchronization for the shareable `content` parameter.
//!
//! The reconciliation itself is pure (`sync_query`); this module only reads
//! the current location and applies replacements via `history.replaceState`
//! so the page neither reloads nor grows history entries.

use rajvanshqr_business::{QuerySync, content_from_query, sync_query};
use wasm_bindgen::JsValue;

/// Reads the seed content from the current location, if present.
pub fn initial_content() -> Option<String> {
    let location = web_sys::window()?.location();
    let search = location.search().ok()?;
    content_from_query(&search)
}

/// Mirrors the trimmed input into the `content` query parameter.
pub fn sync_location(trimmed: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(search), Ok(pathname)) = (location.search(), location.pathname()) else {
        return;
    };

    let QuerySync::Replace(query) = sync_query(&search, trimmed) else {
        return;
    };

    let url = if query.is_empty() {
        pathname
    } else {
        format!("{pathname}?{query}")
    };

    let replaced = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if replaced.is_err() {
        log::warn!("Failed to update the address bar");
    }
}
