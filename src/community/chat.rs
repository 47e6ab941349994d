//! Live chat rules.
//!
//! Delivery is the document store's live query. What stays here is the
//! send-side validation (sign-in, length, cooldown) and the window the
//! chat subscribes with, applied to a snapshot.
//!
//! Times are plain millisecond timestamps supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::core::config::EditorConfig;
use crate::core::error::ContentError;
use crate::core::viewer::Viewer;

/// How far back the chat shows messages.
pub const CHAT_WINDOW_MS: u64 = 24 * 60 * 60 * 1000;

/// Most messages the chat shows at once.
pub const CHAT_HISTORY_LIMIT: usize = 100;

const ANONYMOUS_NAME: &str = "Anonymous";

/// A stored chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub text: String,
    pub username: String,
    pub uid: String,
    /// Server timestamp in milliseconds. `None` while a write is pending.
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
}

/// A message ready to be written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub text: String,
    pub username: String,
    pub uid: String,
}

/// Tracks the last accepted send for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendCooldown {
    last_sent_ms: Option<u64>,
}

impl SendCooldown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds left before another send is allowed.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64, cooldown_ms: u64) -> u64 {
        match self.last_sent_ms {
            Some(last) => last.saturating_add(cooldown_ms).saturating_sub(now_ms),
            None => 0,
        }
    }

    pub fn record(&mut self, now_ms: u64) {
        self.last_sent_ms = Some(now_ms);
    }
}

/// Validate a chat message and start the cooldown if it passes.
///
/// The stored text is trimmed. A rejected message does not touch the
/// cooldown.
pub fn validate_message(
    text: &str,
    viewer: &Viewer,
    now_ms: u64,
    cooldown: &mut SendCooldown,
    config: &EditorConfig,
) -> Result<NewMessage, ContentError> {
    let Some(user) = viewer.user.as_ref() else {
        return Err(ContentError::NotSignedIn);
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ContentError::EmptyMessage);
    }
    if text.chars().count() > config.chat_max_chars {
        return Err(ContentError::TooLong {
            field: "message",
            max: config.chat_max_chars,
        });
    }

    let remaining_ms = cooldown.remaining_ms(now_ms, config.chat_cooldown_ms);
    if remaining_ms > 0 {
        return Err(ContentError::Cooldown { remaining_ms });
    }

    cooldown.record(now_ms);

    let username = if user.username.trim().is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        user.username.clone()
    };

    Ok(NewMessage {
        text: text.to_string(),
        username,
        uid: user.uid.clone(),
    })
}

/// Messages from the last 24 hours, oldest first, at most
/// `CHAT_HISTORY_LIMIT` of them (the oldest ones in the window).
///
/// Messages still waiting for a server timestamp are left out.
#[must_use]
pub fn recent_messages(messages: &[Message], now_ms: u64) -> Vec<&Message> {
    let since = now_ms.saturating_sub(CHAT_WINDOW_MS);
    let mut recent: Vec<&Message> = messages
        .iter()
        .filter(|m| m.timestamp_ms.is_some_and(|ts| ts > since))
        .collect();
    recent.sort_by_key(|m| m.timestamp_ms);
    recent.truncate(CHAT_HISTORY_LIMIT);
    recent
}
