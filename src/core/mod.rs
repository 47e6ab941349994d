//! Core types: configuration, errors, session identity.
//!
//! Nothing here knows about cards or decks. The other modules take these
//! as explicit arguments rather than reading ambient state.

pub mod config;
pub mod error;
pub mod viewer;

pub use config::{EditorConfig, DECK_SIZE};
pub use error::{CatalogError, ContentError, DeckError, SuggestionError};
pub use viewer::{UserInfo, Viewer};
