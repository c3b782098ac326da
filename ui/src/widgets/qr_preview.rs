//! The rendered QR image surface.

use egui::{Image, Response, Ui, vec2};
use rajvanshqr_business::encoded_value;

use crate::state::State;
use crate::utils::qr::refresh_surface;

/// Keeps the QR surface current and draws it at the selected size.
///
/// The texture is drawn with nearest-neighbor filtering so the modules stay
/// crisp at any display scale.
pub fn qr_preview(state: &mut State, ui: &mut Ui) -> Response {
    let content = encoded_value(&state.content).to_owned();
    refresh_surface(ui.ctx(), &mut state.surface, &content, state.size);

    match &state.surface {
        Some(surface) => {
            let side = state.size as f32;
            ui.add(Image::new(surface.texture()).fit_to_exact_size(vec2(side, side)))
        }
        None => ui.weak("This content is too long to encode as a QR code."),
    }
}

#[cfg(test)]
mod qr_preview_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable as _;

    use crate::state::State;

    #[test]
    fn test_preview_produces_a_surface_for_the_default_content() {
        let state = State::default();
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_preview(state, ui);
            },
            state,
        );

        harness.step();
        let surface = harness.state().surface.as_ref().expect("surface");
        assert!(surface.matches("https://abhijayrajvansh.com", 300));
    }

    #[test]
    fn test_preview_regenerates_when_the_size_changes() {
        let state = State::default();
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_preview(state, ui);
            },
            state,
        );

        harness.step();
        let before = harness.state().surface.as_ref().expect("surface").side_px();

        harness.state_mut().size = 160;
        harness.step();
        let after = harness.state().surface.as_ref().expect("surface").side_px();

        assert!(after < before, "smaller target should shrink the raster");
    }

    #[test]
    fn test_preview_reports_unencodable_content() {
        let mut state = State::default();
        state.content = "x".repeat(8000);
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_preview(state, ui);
            },
            state,
        );

        harness.step();
        assert!(harness.state().surface.is_none());
        assert!(
            harness
                .query_by_label_contains("too long to encode")
                .is_some()
        );
    }
}
