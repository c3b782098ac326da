//! Clipboard copy support for the encoded text.
//!
//! Native targets write through the `arboard` crate and resolve
//! synchronously. The web target goes through the asynchronous browser
//! Clipboard API; the outcome comes back over a channel the app drains on
//! the next frame.

use flume::{Receiver, Sender};
use rajvanshqr_business::ActionError;

/// Outcome of one copy attempt.
pub type CopyResult = Result<(), ActionError>;

/// Sender handed to asynchronous clipboard backends.
pub type CopyResultSender = Sender<CopyResult>;

/// Receiver the app polls for deferred outcomes.
pub type CopyResultReceiver = Receiver<CopyResult>;

/// Creates the channel asynchronous clipboard backends report through.
pub fn create_copy_channel() -> (CopyResultSender, CopyResultReceiver) {
    flume::unbounded()
}

/// Trait for clipboard writes, enabling mock implementations for testing.
pub trait ClipboardHandler {
    /// Starts copying `text` to the clipboard.
    ///
    /// Synchronous backends return the outcome directly. Asynchronous ones
    /// return `None` and deliver the outcome on `results` once it is known.
    fn copy_text(&self, text: &str, results: &CopyResultSender) -> Option<CopyResult>;
}

/// Clipboard handler backed by the host system's clipboard.
#[derive(Default)]
pub struct SystemClipboardHandler;

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardHandler for SystemClipboardHandler {
    fn copy_text(&self, text: &str, _results: &CopyResultSender) -> Option<CopyResult> {
        use arboard::Clipboard;

        let mut clipboard = match Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                log::warn!("Failed to access clipboard: {e}");
                return Some(Err(ActionError::ClipboardUnavailable));
            }
        };

        match clipboard.set_text(text) {
            Ok(()) => Some(Ok(())),
            Err(e) => {
                log::warn!("Failed to write clipboard text: {e}");
                Some(Err(ActionError::ClipboardWriteFailed))
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ClipboardHandler for SystemClipboardHandler {
    fn copy_text(&self, text: &str, results: &CopyResultSender) -> Option<CopyResult> {
        use wasm_bindgen_futures::JsFuture;

        // Presence is checked up front so the error is reported without
        // attempting a write at all.
        let Some(clipboard) = browser_clipboard() else {
            return Some(Err(ActionError::ClipboardUnavailable));
        };

        let text = text.to_owned();
        let results = results.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => Ok(()),
                Err(e) => {
                    log::warn!("Clipboard write rejected: {e:?}");
                    Err(ActionError::ClipboardWriteFailed)
                }
            };
            // The receiver lives in app state; a send failure means the app
            // is already gone.
            let _ = results.send(outcome);
        });

        None
    }
}

/// Looks up `navigator.clipboard`, which is absent outside secure contexts.
#[cfg(target_arch = "wasm32")]
fn browser_clipboard() -> Option<web_sys::Clipboard> {
    use wasm_bindgen::{JsCast as _, JsValue};

    let navigator = web_sys::window()?.navigator();
    let clipboard =
        web_sys::js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
    clipboard.dyn_into::<web_sys::Clipboard>().ok()
}
