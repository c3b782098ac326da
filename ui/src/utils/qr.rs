//! QR surface generation.
//!
//! The same raster backs both the on-screen preview and the PNG export, so
//! it is kept as raw pixels plus the uploaded egui texture, keyed by the
//! (content, size) pair it was generated from.

use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use qrcode::{EcLevel, QrCode};

/// A rendered QR raster kept for display and export.
pub struct QrSurface {
    image: ColorImage,
    texture: TextureHandle,
    content: String,
    size: u32,
}

impl QrSurface {
    /// Whether this surface was generated from the given content and size.
    pub fn matches(&self, content: &str, size: u32) -> bool {
        self.content == content && self.size == size
    }

    /// The raster pixels, for PNG export.
    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// The uploaded texture, for drawing.
    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Actual side length of the raster in pixels.
    ///
    /// May differ from the requested size: modules are scaled by a whole
    /// factor so they stay sharp.
    pub fn side_px(&self) -> usize {
        self.image.size[0]
    }
}

/// Regenerates the surface in `slot` when the content or target size moved.
///
/// Encoding failures (content beyond QR capacity) empty the slot; the
/// export action then reports that no surface is available.
pub fn refresh_surface(ctx: &Context, slot: &mut Option<QrSurface>, content: &str, size: u32) {
    if slot.as_ref().is_some_and(|s| s.matches(content, size)) {
        return;
    }

    match generate_qr_image(content, size as usize) {
        Some(image) => {
            let texture = ctx.load_texture("qr-code", image.clone(), TextureOptions::NEAREST);
            *slot = Some(QrSurface {
                image,
                texture,
                content: content.to_owned(),
                size,
            });
        }
        None => {
            log::warn!(
                "Failed to encode QR code from {} bytes of content",
                content.len()
            );
            *slot = None;
        }
    }
}

/// Generates a QR code raster for the given data.
///
/// Error correction level H, black modules on white. The module grid is
/// scaled by the largest whole factor that keeps the raster at or under
/// `size` pixels (minimum factor 1).
pub fn generate_qr_image(data: &str, size: usize) -> Option<ColorImage> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H).ok()?;
    let grid = code.width();
    let scale = (size / grid).max(1);
    let side = grid * scale;

    let mut pixels = vec![Color32::WHITE; side * side];
    for (index, module) in code.to_colors().iter().enumerate() {
        if *module != qrcode::Color::Dark {
            continue;
        }
        let left = (index % grid) * scale;
        let top = (index / grid) * scale;
        for row in pixels[top * side..].chunks_mut(side).take(scale) {
            row[left..left + scale].fill(Color32::BLACK);
        }
    }

    Some(ColorImage::new([side, side], pixels))
}
