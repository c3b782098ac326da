//! The Download / Copy action row and the handlers behind it.

use egui::{Response, Ui};
use rajvanshqr_business::{ActionError, Tone, encoded_value};

use crate::state::State;
use crate::utils::clipboard::{ClipboardHandler, CopyResult};
use crate::utils::export::{DOWNLOAD_FILE_NAME, DownloadHandler, DownloadOutcome, encode_png};

const DOWNLOAD_SUCCESS_NOTICE: &str = "Downloaded QR code as PNG.";
const COPY_SUCCESS_NOTICE: &str = "Copied encoded text to clipboard.";

/// Renders the two action buttons and dispatches clicks to the handlers.
pub fn action_buttons(
    state: &mut State,
    ui: &mut Ui,
    clipboard: &dyn ClipboardHandler,
    downloads: &dyn DownloadHandler,
) -> Response {
    ui.horizontal(|ui| {
        let now = ui.input(|i| i.time);

        if ui.button("Download PNG").clicked() {
            trigger_download(state, downloads, now);
        }
        if ui.button("Copy Encoded Text").clicked() {
            trigger_copy(state, clipboard, now);
        }
    })
    .response
}

/// Exports the current QR surface as a PNG download.
///
/// Without a surface this reports an error notice and touches no file. A
/// dismissed save dialog stays quiet; everything else ends in a notice.
pub fn trigger_download(state: &mut State, downloads: &dyn DownloadHandler, now: f64) {
    let Some(surface) = state.surface.as_ref() else {
        state
            .feedback
            .show(ActionError::RenderNotReady.to_string(), Tone::Error, now);
        return;
    };

    let saved = encode_png(surface.image())
        .and_then(|png| downloads.save_png(DOWNLOAD_FILE_NAME, &png));

    match saved {
        Ok(DownloadOutcome::Saved) => {
            state.feedback.show(DOWNLOAD_SUCCESS_NOTICE, Tone::Success, now);
        }
        Ok(DownloadOutcome::Cancelled) => {
            log::debug!("Download cancelled by the user");
        }
        Err(err) => {
            state.feedback.show(err.to_string(), Tone::Error, now);
        }
    }
}

/// Copies the encoded (trimmed or fallback) value to the clipboard.
///
/// Synchronous backends resolve into a notice immediately; asynchronous
/// ones report later through the copy-result channel.
pub fn trigger_copy(state: &mut State, clipboard: &dyn ClipboardHandler, now: f64) {
    let value = encoded_value(&state.content).to_owned();
    if let Some(result) = clipboard.copy_text(&value, &state.copy_result_sender) {
        apply_copy_result(state, result, now);
    }
}

/// Turns a copy outcome into the matching notice.
pub fn apply_copy_result(state: &mut State, result: CopyResult, now: f64) {
    match result {
        Ok(()) => state.feedback.show(COPY_SUCCESS_NOTICE, Tone::Success, now),
        Err(err) => state.feedback.show(err.to_string(), Tone::Error, now),
    }
}
