//! The single QR form route.
//!
//! Gathers the text to encode, tracks the size preference, renders the
//! scannable code and exposes the export actions.

use egui::Ui;

use crate::state::State;
use crate::utils::clipboard::ClipboardHandler;
use crate::utils::export::DownloadHandler;
use crate::widgets;

/// Renders the form page.
///
/// Returns whether the content buffer changed this frame, so the app can
/// mirror the shareable URL.
pub fn form_page(
    state: &mut State,
    ui: &mut Ui,
    clipboard: &dyn ClipboardHandler,
    downloads: &dyn DownloadHandler,
) -> bool {
    ui.heading("Realtime QR Generator");
    ui.label("Generate & Download QR Codes Instantly!");
    ui.add_space(12.0);

    let content_response = widgets::content_input(state, ui);

    ui.add_space(8.0);
    widgets::size_slider(state, ui);

    ui.add_space(12.0);
    widgets::qr_preview(state, ui);

    ui.add_space(12.0);
    widgets::action_buttons(state, ui, clipboard, downloads);
    widgets::feedback_label(state, ui);

    ui.add_space(16.0);
    widgets::footer(ui);

    content_response.changed()
}
