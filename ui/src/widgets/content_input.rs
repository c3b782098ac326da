//! Multiline editor for the text to encode.

use egui::{Response, RichText, TextEdit, Ui};

use crate::state::State;

/// Renders the content editor and returns its response.
///
/// The caller checks `changed()` to know when to re-mirror the shareable
/// URL.
pub fn content_input(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.label(RichText::new("Content to encode").small().strong());
        ui.add(
            TextEdit::multiline(&mut state.content)
                .desired_rows(2)
                .desired_width(f32::INFINITY)
                .hint_text("Paste a URL, drop a note, or add contact details..."),
        )
    })
    .inner
}
