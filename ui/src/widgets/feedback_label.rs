//! Transient status line under the action row.

use egui::{Response, Ui};
use rajvanshqr_business::Tone;

use crate::state::State;
use crate::utils::colors::{COLOR_GRAY, COLOR_GREEN, COLOR_RED};

/// Renders the live notice, if any, in its tone color.
pub fn feedback_label(state: &State, ui: &mut Ui) -> Option<Response> {
    let notice = state.feedback.current()?;
    let color = match notice.tone {
        Tone::Success => COLOR_GREEN,
        Tone::Error => COLOR_RED,
        Tone::Default => COLOR_GRAY,
    };
    Some(ui.colored_label(color, &notice.message))
}
