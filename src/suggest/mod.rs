//! AI deck suggestions.
//!
//! The model itself is an external collaborator reached through
//! `SuggestionGenerator`. This module owns everything around it:
//!
//! - `SuggestionRequest`: summary length validation
//! - `render_prompt`: the instruction text
//! - `parse_suggestion`: JSON extraction from model output
//! - `Suggestion::resolve`: catalog lookup with per-card placeholders

pub mod generator;
pub mod request;
pub mod response;

pub use generator::{suggest_deck, SuggestionGenerator};
pub use request::{render_prompt, SuggestionRequest};
pub use response::{parse_suggestion, ResolvedCard, ResolvedSuggestion, Suggestion};
