//! Community features: video showcase and live chat.
//!
//! Persistence and live delivery are handled by the hosted document store.
//! These modules only hold the rules applied on either side of it, so they
//! can be tested without a backend.

pub mod chat;
pub mod video;

pub use chat::{recent_messages, validate_message, Message, NewMessage, SendCooldown};
pub use video::{authorize_delete, sort_latest_first, youtube_thumbnail, youtube_video_id, Video, VideoDraft, VideoEntry};
