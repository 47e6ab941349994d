//! Editor configuration.
//!
//! The site configures the deck tools at startup by providing an
//! `EditorConfig`. Every field has a default, so a partial JSON document
//! (or none at all) is enough:
//!
//! - `initial_sort`: how the catalog is ordered when an editor opens
//! - `summary_*`: bounds on the free-text summary sent to the generator
//! - `chat_*`: live chat message length and send cooldown
//! - `video_*`: minimum lengths for admin video entries
//!
//! Deck capacity is not configurable; see [`DECK_SIZE`].

use serde::{Deserialize, Serialize};

use crate::sort::SortState;

/// Number of slots in a deck.
pub const DECK_SIZE: usize = 8;

/// Configuration shared by the editor, suggestion and community rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Sort state a new editor session starts with.
    pub initial_sort: SortState,

    /// Minimum summary length, in characters.
    pub summary_min_chars: usize,

    /// Maximum summary length, in characters.
    pub summary_max_chars: usize,

    /// Maximum chat message length after trimming, in characters.
    pub chat_max_chars: usize,

    /// Minimum time between two accepted chat messages, in milliseconds.
    pub chat_cooldown_ms: u64,

    /// Minimum video title length, in characters.
    pub video_title_min_chars: usize,

    /// Minimum video creator length, in characters.
    pub video_creator_min_chars: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_sort: SortState::default(),
            summary_min_chars: 50,
            summary_max_chars: 1000,
            chat_max_chars: 280,
            chat_cooldown_ms: 5_000,
            video_title_min_chars: 5,
            video_creator_min_chars: 3,
        }
    }
}

impl EditorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the initial sort state.
    #[must_use]
    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = sort;
        self
    }

    /// Set the accepted summary length range.
    #[must_use]
    pub fn with_summary_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.summary_min_chars = min_chars;
        self.summary_max_chars = max_chars;
        self
    }

    /// Set chat length limit and cooldown.
    #[must_use]
    pub fn with_chat_limits(mut self, max_chars: usize, cooldown_ms: u64) -> Self {
        self.chat_max_chars = max_chars;
        self.chat_cooldown_ms = cooldown_ms;
        self
    }
}
