//! Render size bounds derived from the viewport device class.
//!
//! The rendered QR code is a square whose side length the user can adjust.
//! The allowed range and the default depend on whether the viewport is a
//! mobile or a desktop layout.

/// Viewport width (logical pixels) below which the mobile layout applies.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Increment used by the size slider.
pub const SIZE_STEP: u32 = 16;

/// Mobile vs desktop viewport classification.
///
/// Defaults to `Desktop` until the first viewport measurement arrives,
/// matching how the layout behaves before it knows the real width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport by its width in logical pixels.
    pub fn from_viewport_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// The render-size bounds for this class.
    pub fn size_bounds(self) -> SizeBounds {
        match self {
            // 280 and 200 were the slider defaults before the per-device
            // bounds existed; a size still sitting on one of them snaps to
            // the current default on a class change.
            Self::Mobile => SizeBounds {
                default: 200,
                min: 120,
                max: 320,
                legacy_default: 280,
            },
            Self::Desktop => SizeBounds {
                default: 300,
                min: 160,
                max: 400,
                legacy_default: 200,
            },
        }
    }
}

/// Default, minimum and maximum side length for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub default: u32,
    pub min: u32,
    pub max: u32,
    legacy_default: u32,
}

impl SizeBounds {
    /// Re-applies these bounds to a size carried over from another class.
    ///
    /// Returns the class default when the size is out of range or still
    /// equals the legacy default marker; otherwise the size is kept.
    pub fn apply(&self, current: u32) -> u32 {
        if current < self.min || current > self.max || current == self.legacy_default {
            self.default
        } else {
            current
        }
    }

    /// Whether a size lies within these bounds.
    pub fn contains(&self, size: u32) -> bool {
        size >= self.min && size <= self.max
    }
}
