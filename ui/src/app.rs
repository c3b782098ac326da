use std::time::Duration;

use bon::Builder;
use rajvanshqr_business::DeviceClass;

use crate::pages;
use crate::state::State;
use crate::utils::clipboard::{ClipboardHandler, SystemClipboardHandler};
use crate::utils::export::{DownloadHandler, SystemDownloadHandler};
use crate::widgets;

/// Single-page application wrapping the QR form state.
///
/// The clipboard and download handlers are trait objects so tests can
/// inject mocks through the builder.
#[derive(Builder)]
pub struct RajvanshQrApp {
    #[builder(default)]
    pub state: State,
    #[builder(default = Box::new(SystemClipboardHandler))]
    clipboard: Box<dyn ClipboardHandler>,
    #[builder(default = Box::new(SystemDownloadHandler))]
    downloads: Box<dyn DownloadHandler>,
}

impl RajvanshQrApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self::builder().state(state).build()
    }
}

impl eframe::App for RajvanshQrApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // The device class follows the viewport; bounds are re-applied on a
        // class change so the size never leaves the new range.
        let device = DeviceClass::from_viewport_width(ctx.screen_rect().width());
        if device != self.state.device {
            self.state.device = device;
            self.state.size = device.size_bounds().apply(self.state.size);
        }

        // Resolve copy outcomes queued by asynchronous clipboard backends.
        while let Ok(result) = self.state.copy_result_receiver.try_recv() {
            widgets::apply_copy_result(&mut self.state, result, now);
        }

        // Expire the transient notice; while one is live, wake up exactly
        // when it has to clear.
        if let Some(deadline) = self.state.feedback.tick(now) {
            ctx.request_repaint_after(Duration::from_secs_f64((deadline - now).max(0.0)));
        }

        let mut content_changed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            content_changed = pages::form_page(
                &mut self.state,
                ui,
                self.clipboard.as_ref(),
                self.downloads.as_ref(),
            );
        });

        if content_changed {
            self.sync_share_url();
        }
    }
}

impl RajvanshQrApp {
    /// Mirrors the trimmed content into the `content` query parameter so
    /// the page URL stays shareable.
    #[cfg(target_arch = "wasm32")]
    fn sync_share_url(&self) {
        crate::utils::share_url::sync_location(self.state.content.trim());
    }

    /// There is no address bar to mirror into on native targets.
    #[cfg(not(target_arch = "wasm32"))]
    fn sync_share_url(&self) {}
}
