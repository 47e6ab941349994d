//! Deck construction: slots, commands, statistics, presets.
//!
//! ## Key Types
//!
//! - `DeckSlots`: Eight ordered slots, each empty or holding one card
//! - `DeckCommand`: Add / remove / clear / drop request
//! - `CommandOutcome` / `Rejection`: What a command did
//! - `DeckStats`: Average elixir and friends, derived from the slots
//! - `DeckPreset`: Named list of card names
//!
//! The deck is passive. It never notifies anyone; callers read it (and
//! recompute stats) after each write.

pub mod command;
pub mod preset;
pub mod slots;
pub mod stats;

pub use command::{apply, CommandOutcome, DeckCommand, Rejection};
pub use preset::DeckPreset;
pub use slots::DeckSlots;
pub use stats::{compute_stats, DeckStats};
