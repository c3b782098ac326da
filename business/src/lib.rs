mod content;
mod error;
mod feedback;
mod share_link;
mod sizing;
pub mod version_info;

pub use content::{DEFAULT_CONTENT, encoded_value};
pub use error::ActionError;
pub use feedback::{FeedbackNotice, FeedbackState, NOTICE_TTL_SECS, Tone};
pub use share_link::{CONTENT_PARAM, QuerySync, content_from_query, sync_query};
pub use sizing::{DeviceClass, MOBILE_BREAKPOINT, SIZE_STEP, SizeBounds};
