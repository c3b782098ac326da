//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for success notices.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for error notices.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Slate gray for neutral notices.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(100, 116, 139);
