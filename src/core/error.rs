//! Error types.
//!
//! Each concern has its own enum. Rejected deck mutations (duplicate card,
//! full deck, occupied slot) are not errors; see `deck::Rejection`.

use thiserror::Error;

/// Errors building or loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card name must not be empty")]
    EmptyName,
    #[error("duplicate card name: {0}")]
    DuplicateName(String),
    #[error("card {name} has elixir {elixir}, expected 1..=9")]
    ElixirOutOfRange { name: String, elixir: u8 },
    #[error("card {name} has release order {order}, expected more than {previous}")]
    ReleaseOrderNotIncreasing {
        name: String,
        order: u32,
        previous: u32,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("slot index {index} out of range (deck has {capacity} slots)")]
    InvalidIndex { index: usize, capacity: usize },
    #[error("unknown card: {0}")]
    UnknownCard(String),
    #[error("deck lists {count} cards, at most {capacity} fit")]
    TooManyCards { count: usize, capacity: usize },
    #[error("card listed twice: {0}")]
    DuplicateCard(String),
}

/// Errors from the deck suggestion pipeline.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("summary is {len} characters, must be at least {min}")]
    SummaryTooShort { len: usize, min: usize },
    #[error("summary is {len} characters, must be at most {max}")]
    SummaryTooLong { len: usize, max: usize },
    #[error("generator returned an empty response")]
    EmptyResponse,
    #[error("malformed suggestion: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("generator failed: {0}")]
    Generator(String),
}

/// Errors validating community content (videos, chat messages).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("sign in required")]
    NotSignedIn,
    #[error("admin access required")]
    NotAdmin,
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("message is empty")]
    EmptyMessage,
    #[error("not a valid video url: {0}")]
    InvalidUrl(String),
    #[error("slow down, wait {remaining_ms} ms before sending again")]
    Cooldown { remaining_ms: u64 },
}
