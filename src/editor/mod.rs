//! Deck editor: binds user input to the deck model.
//!
//! Both interaction shapes reduce to deck commands:
//! - drag a catalog card onto a slot -> `DropOnto` that slot
//! - click a catalog card -> `AddCard` (first free slot)
//! - click a deck slot -> `RemoveAt` that slot

pub mod session;

pub use session::{CardMembership, DeckEditor, EditorEvent};
