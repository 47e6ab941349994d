//! # clash-hub
//!
//! Deck-building core for the Clash Hub community site.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: The card catalog, configuration and viewer
//!    identity are passed in. Nothing reads ambient session state.
//!
//! 2. **Commands, Not Handlers**: Every deck mutation is a `DeckCommand`
//!    run through one reducer, so UI input can be tested without pointer
//!    events.
//!
//! 3. **Passive Model**: The deck never notifies anyone. Callers read the
//!    deck and its stats after each write.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, viewer identity
//! - `cards`: Card definitions, catalog, built-in data
//! - `deck`: Deck slots, command reducer, stats, presets
//! - `sort`: Catalog sort view
//! - `editor`: Deck editor session (drag-and-drop and click input)
//! - `suggest`: AI deck suggestion pipeline around an external generator
//! - `community`: Video and chat validation rules

pub mod cards;
pub mod community;
pub mod core;
pub mod deck;
pub mod editor;
pub mod sort;
pub mod suggest;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, ContentError, DeckError, EditorConfig, SuggestionError, UserInfo, Viewer, DECK_SIZE,
};

pub use crate::cards::{Card, CardId, CardRecord, Catalog};

pub use crate::deck::{compute_stats, CommandOutcome, DeckCommand, DeckPreset, DeckSlots, DeckStats, Rejection};

pub use crate::sort::{sort_cards, SortCriterion, SortDirection, SortState};

pub use crate::editor::{CardMembership, DeckEditor, EditorEvent};

pub use crate::suggest::{
    parse_suggestion, render_prompt, suggest_deck, ResolvedCard, ResolvedSuggestion, Suggestion,
    SuggestionGenerator, SuggestionRequest,
};

pub use crate::community::{Message, SendCooldown, Video, VideoDraft, VideoEntry};
