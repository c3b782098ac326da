//! Transient user-facing notices with auto-expiry.
//!
//! Action outcomes (download, copy) surface as a short status line that
//! disappears on its own. At most one notice is live at a time; showing a
//! new one replaces the old and restarts the expiry window.

/// Seconds a notice stays visible unless superseded first.
pub const NOTICE_TTL_SECS: f64 = 3.2;

/// Visual tone of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Default,
    Success,
    Error,
}

/// A single transient status message.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackNotice {
    pub message: String,
    pub tone: Tone,
    shown_at: f64,
}

impl FeedbackNotice {
    /// The instant (in the caller's clock) this notice should disappear.
    pub fn expires_at(&self) -> f64 {
        self.shown_at + NOTICE_TTL_SECS
    }
}

/// Holds at most one live notice.
///
/// The caller supplies the clock: `now` is an arbitrary monotonic timestamp
/// in seconds, typically the UI frame time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    current: Option<FeedbackNotice>,
}

impl FeedbackState {
    /// Shows a notice, replacing any pending one and restarting its expiry.
    pub fn show(&mut self, message: impl Into<String>, tone: Tone, now: f64) {
        self.current = Some(FeedbackNotice {
            message: message.into(),
            tone,
            shown_at: now,
        });
    }

    /// Drops the notice once its expiry has passed.
    ///
    /// Returns the expiry deadline while a notice is still live, so the UI
    /// can schedule a wakeup for the exact moment it has to clear.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        match &self.current {
            Some(notice) if now >= notice.expires_at() => {
                self.current = None;
                None
            }
            Some(notice) => Some(notice.expires_at()),
            None => None,
        }
    }

    /// The live notice, if any.
    pub fn current(&self) -> Option<&FeedbackNotice> {
        self.current.as_ref()
    }
}
