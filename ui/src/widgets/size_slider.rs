//! Slider for the rendered QR size.
//!
//! Only the desktop layout exposes the slider; mobile keeps the class
//! default, mirroring the form it replaces.

use egui::{Response, RichText, Slider, Ui};
use rajvanshqr_business::{DeviceClass, SIZE_STEP};

use crate::state::State;

/// Renders the size slider on desktop layouts. Returns `None` on mobile.
pub fn size_slider(state: &mut State, ui: &mut Ui) -> Option<Response> {
    if state.device == DeviceClass::Mobile {
        return None;
    }

    let bounds = state.device.size_bounds();
    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("QR size").small().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}px", state.size)).small());
                });
            });
            ui.add(
                Slider::new(&mut state.size, bounds.min..=bounds.max)
                    .step_by(f64::from(SIZE_STEP))
                    .show_value(false),
            )
        })
        .inner;

    Some(response)
}
