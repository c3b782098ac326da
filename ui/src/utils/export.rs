//! PNG export of the rendered QR surface.
//!
//! Native targets go through a save dialog; the web target triggers a
//! browser download via a temporary object URL and a synthetic anchor
//! click.

use egui::ColorImage;
use rajvanshqr_business::ActionError;

/// File name offered for the exported image.
pub const DOWNLOAD_FILE_NAME: &str = "rajvanshqr-code.png";

/// How a download request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was handed to the user.
    Saved,
    /// The user dismissed the save dialog without picking a file.
    Cancelled,
}

/// Trait for delivering the exported PNG, enabling mock implementations for
/// testing.
pub trait DownloadHandler {
    /// Offers `png` to the user under `file_name`.
    fn save_png(&self, file_name: &str, png: &[u8]) -> Result<DownloadOutcome, ActionError>;
}

/// Download handler backed by the platform's native save path.
#[derive(Default)]
pub struct SystemDownloadHandler;

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for SystemDownloadHandler {
    fn save_png(&self, file_name: &str, png: &[u8]) -> Result<DownloadOutcome, ActionError> {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(file_name)
            .set_title("Save QR code")
            .save_file()
        else {
            log::debug!("Save dialog dismissed without a file");
            return Ok(DownloadOutcome::Cancelled);
        };

        std::fs::write(&path, png).map_err(|e| {
            log::warn!("Failed to write {path:?}: {e}");
            ActionError::ExportFailed
        })?;

        log::info!("Saved QR code to {path:?}");
        Ok(DownloadOutcome::Saved)
    }
}

#[cfg(target_arch = "wasm32")]
impl DownloadHandler for SystemDownloadHandler {
    fn save_png(&self, file_name: &str, png: &[u8]) -> Result<DownloadOutcome, ActionError> {
        trigger_browser_download(file_name, png).map_err(|e| {
            log::warn!("Browser download failed: {e:?}");
            ActionError::ExportFailed
        })?;
        Ok(DownloadOutcome::Saved)
    }
}

/// Wraps the bytes in a Blob and clicks a temporary `download` anchor.
#[cfg(target_arch = "wasm32")]
fn trigger_browser_download(file_name: &str, bytes: &[u8]) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::js_sys::{Array, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let data = Uint8Array::new_with_length(bytes.len() as u32);
    data.copy_from(bytes);
    let parts = Array::of1(&data);

    let props = BlobPropertyBag::new();
    props.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;

    Ok(())
}

/// Encodes the surface pixels as a PNG.
pub fn encode_png(image: &ColorImage) -> Result<Vec<u8>, ActionError> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder as _};

    let [width, height] = image.size;
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            image.as_raw(),
            width as u32,
            height as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| {
            log::warn!("Failed to encode PNG: {e}");
            ActionError::ExportFailed
        })?;

    Ok(png)
}
