//! Footer with the site link and build version.

use egui::{Response, Ui};
use rajvanshqr_business::version_info;

/// Renders the copyright link and the running version.
pub fn footer(ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.hyperlink_to(
            "© A. Rajvansh. All rights reserved.",
            "https://abhijayrajvansh.com",
        );
        ui.label("  ");
        ui.weak(version_info::format_version());
    })
    .response
}
