//! Failure taxonomy for the export and copy actions.

use thiserror::Error;

/// Non-fatal action failures, surfaced to the user as a transient notice.
///
/// The `Display` strings are the exact messages shown in the UI.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The QR surface has not been produced yet.
    #[error("QR code is still rendering.")]
    RenderNotReady,

    /// The host environment exposes no clipboard.
    #[error("Clipboard access is unavailable.")]
    ClipboardUnavailable,

    /// The clipboard write was attempted and failed.
    #[error("Could not copy to clipboard.")]
    ClipboardWriteFailed,

    /// The PNG could not be encoded or written out.
    #[error("Could not save the QR code image.")]
    ExportFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ActionError::RenderNotReady.to_string(),
            "QR code is still rendering."
        );
        assert_eq!(
            ActionError::ClipboardUnavailable.to_string(),
            "Clipboard access is unavailable."
        );
        assert_eq!(
            ActionError::ClipboardWriteFailed.to_string(),
            "Could not copy to clipboard."
        );
    }
}
