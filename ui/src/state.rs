use rajvanshqr_business::{DEFAULT_CONTENT, DeviceClass, FeedbackState};

use crate::utils::clipboard::{CopyResultReceiver, CopyResultSender, create_copy_channel};
use crate::utils::qr::QrSurface;

/// The main application state.
///
/// Note: We manually implement Default because the copy-result channel
/// endpoints don't implement Default.
pub struct State {
    /// Raw text buffer bound to the content editor.
    pub content: String,
    /// Side length of the rendered QR code, in pixels.
    pub size: u32,
    /// Device class computed from the current viewport width.
    pub device: DeviceClass,
    /// Transient notice shown under the action buttons.
    pub feedback: FeedbackState,
    /// The rendered QR surface, once produced for the current content/size.
    pub surface: Option<QrSurface>,
    /// Sender handed to asynchronous clipboard backends.
    pub copy_result_sender: CopyResultSender,
    /// Receiver drained every frame for copy outcomes.
    pub copy_result_receiver: CopyResultReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::seeded(None)
    }
}

impl State {
    /// Builds the initial state, optionally seeded from a shared link.
    ///
    /// Without a seed the editor starts on the default content, so the page
    /// always renders a scannable code.
    pub fn seeded(content: Option<String>) -> Self {
        let device = DeviceClass::default();
        let (copy_result_sender, copy_result_receiver) = create_copy_channel();

        Self {
            content: content.unwrap_or_else(|| DEFAULT_CONTENT.to_owned()),
            size: device.size_bounds().default,
            device,
            feedback: FeedbackState::default(),
            surface: None,
            copy_result_sender,
            copy_result_receiver,
        }
    }
}
