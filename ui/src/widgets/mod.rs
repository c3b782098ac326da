mod actions;
mod content_input;
mod feedback_label;
mod footer;
mod qr_preview;
mod size_slider;

pub use actions::{action_buttons, apply_copy_result, trigger_copy, trigger_download};
pub use content_input::content_input;
pub use feedback_label::feedback_label;
pub use footer::footer;
pub use qr_preview::qr_preview;
pub use size_slider::size_slider;
