#![allow(dead_code)] // each integration test binary uses a subset of these helpers

use std::cell::RefCell;
use std::rc::Rc;

use egui_kittest::Harness;
use rajvanshqr_business::ActionError;
use rajvanshqr_ui::RajvanshQrApp;
use rajvanshqr_ui::utils::clipboard::{ClipboardHandler, CopyResult, CopyResultSender};
use rajvanshqr_ui::utils::export::{DownloadHandler, DownloadOutcome};

/// Builds an app harness with test logging initialized.
pub fn app_harness<'a>(app: RajvanshQrApp) -> Harness<'a, RajvanshQrApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::new_eframe(|_| app)
}

/// Clipboard mock that records writes and reports success synchronously.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Rc<RefCell<Vec<String>>>,
}

impl ClipboardHandler for RecordingClipboard {
    fn copy_text(&self, text: &str, _results: &CopyResultSender) -> Option<CopyResult> {
        self.writes.borrow_mut().push(text.to_owned());
        Some(Ok(()))
    }
}

/// Clipboard mock for a host without any clipboard capability.
pub struct MissingClipboard;

impl ClipboardHandler for MissingClipboard {
    fn copy_text(&self, _text: &str, _results: &CopyResultSender) -> Option<CopyResult> {
        Some(Err(ActionError::ClipboardUnavailable))
    }
}

/// Clipboard mock that defers a fixed outcome through the channel, the way
/// the asynchronous web backend does.
pub struct DeferredClipboard {
    pub outcome: CopyResult,
}

impl ClipboardHandler for DeferredClipboard {
    fn copy_text(&self, _text: &str, results: &CopyResultSender) -> Option<CopyResult> {
        results.send(self.outcome).expect("app receiver should be alive");
        None
    }
}

/// Download mock that records every save it is asked to perform.
#[derive(Default)]
pub struct RecordingDownloads {
    pub saves: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
}

impl DownloadHandler for RecordingDownloads {
    fn save_png(&self, file_name: &str, png: &[u8]) -> Result<DownloadOutcome, ActionError> {
        self.saves.borrow_mut().push((file_name.to_owned(), png.to_vec()));
        Ok(DownloadOutcome::Saved)
    }
}

/// Download mock behaving like a dismissed save dialog.
pub struct CancellingDownloads;

impl DownloadHandler for CancellingDownloads {
    fn save_png(&self, _file_name: &str, _png: &[u8]) -> Result<DownloadOutcome, ActionError> {
        Ok(DownloadOutcome::Cancelled)
    }
}

/// Download mock behaving like a failed file write.
pub struct FailingDownloads;

impl DownloadHandler for FailingDownloads {
    fn save_png(&self, _file_name: &str, _png: &[u8]) -> Result<DownloadOutcome, ActionError> {
        Err(ActionError::ExportFailed)
    }
}
