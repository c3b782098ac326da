//! Integration tests for the Copy Encoded Text action.

mod common;

use common::{DeferredClipboard, MissingClipboard, RecordingClipboard, RecordingDownloads, app_harness};
use kittest::Queryable as _;
use rajvanshqr_business::{ActionError, DEFAULT_CONTENT};
use rajvanshqr_ui::RajvanshQrApp;
use rajvanshqr_ui::state::State;

fn click_copy(harness: &mut egui_kittest::Harness<'_, RajvanshQrApp>) {
    harness
        .query_by_label_contains("Copy Encoded Text")
        .expect("copy button should render")
        .click();
    for _ in 0..3 {
        harness.step();
    }
}

#[test]
fn test_copy_writes_the_encoded_value_and_reports_success() {
    let clipboard = RecordingClipboard::default();
    let writes = std::rc::Rc::clone(&clipboard.writes);
    let app = RajvanshQrApp::builder()
        .clipboard(Box::new(clipboard))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    click_copy(&mut harness);

    assert_eq!(writes.borrow().as_slice(), &[DEFAULT_CONTENT.to_owned()]);
    assert!(
        harness
            .query_by_label_contains("Copied encoded text to clipboard.")
            .is_some()
    );
}

#[test]
fn test_copy_of_blank_content_writes_the_fallback() {
    let clipboard = RecordingClipboard::default();
    let writes = std::rc::Rc::clone(&clipboard.writes);
    let app = RajvanshQrApp::builder()
        .state(State::seeded(Some("   ".to_owned())))
        .clipboard(Box::new(clipboard))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    click_copy(&mut harness);

    assert_eq!(writes.borrow().as_slice(), &[DEFAULT_CONTENT.to_owned()]);
}

#[test]
fn test_missing_clipboard_reports_an_error_notice() {
    let app = RajvanshQrApp::builder()
        .clipboard(Box::new(MissingClipboard))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    click_copy(&mut harness);

    assert!(
        harness
            .query_by_label_contains("Clipboard access is unavailable.")
            .is_some()
    );
}

#[test]
fn test_deferred_write_failure_resolves_into_an_error_notice() {
    // The web backend resolves through the channel on a later frame.
    let app = RajvanshQrApp::builder()
        .clipboard(Box::new(DeferredClipboard {
            outcome: Err(ActionError::ClipboardWriteFailed),
        }))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    click_copy(&mut harness);

    assert!(
        harness
            .query_by_label_contains("Could not copy to clipboard.")
            .is_some()
    );
}

#[test]
fn test_deferred_success_resolves_into_a_success_notice() {
    let app = RajvanshQrApp::builder()
        .clipboard(Box::new(DeferredClipboard { outcome: Ok(()) }))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    click_copy(&mut harness);

    assert!(
        harness
            .query_by_label_contains("Copied encoded text to clipboard.")
            .is_some()
    );
}

#[test]
fn test_newer_notice_supersedes_the_previous_one() {
    let downloads = RecordingDownloads::default();
    let app = RajvanshQrApp::builder()
        .clipboard(Box::new(MissingClipboard))
        .downloads(Box::new(downloads))
        .build();
    let mut harness = app_harness(app);
    harness.step();

    harness
        .query_by_label_contains("Download PNG")
        .expect("download button should render")
        .click();
    for _ in 0..3 {
        harness.step();
    }
    assert!(
        harness
            .query_by_label_contains("Downloaded QR code as PNG.")
            .is_some()
    );

    click_copy(&mut harness);

    assert!(
        harness
            .query_by_label_contains("Clipboard access is unavailable.")
            .is_some(),
        "the newest notice should be visible"
    );
    assert!(
        harness
            .query_by_label_contains("Downloaded QR code as PNG.")
            .is_none(),
        "the superseded notice should be gone"
    );
}
