//! Deck commands and the reducer that applies them.
//!
//! Every way of changing a deck (click, drag-and-drop, clear button) is
//! reduced to a `DeckCommand` and applied with [`apply`]. This keeps the
//! mutation rules in one place and makes them testable without any
//! pointer events.
//!
//! Outcomes:
//! - `Ok(CommandOutcome::Applied)`: the deck changed
//! - `Ok(CommandOutcome::Rejected(_))`: a rule refused the change; the deck
//!   is untouched and nothing is wrong
//! - `Err(DeckError::InvalidIndex)`: the command named a slot that does
//!   not exist

use serde::{Deserialize, Serialize};

use super::slots::DeckSlots;
use crate::cards::Card;
use crate::core::error::DeckError;

/// A request to change a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckCommand {
    /// Add to the lowest-indexed empty slot.
    AddCard(Card),
    /// Empty the given slot.
    RemoveAt(usize),
    /// Empty every slot.
    Clear,
    /// Put a card in a specific (empty) slot.
    DropOnto { card: Card, slot: usize },
}

/// Why a command left the deck unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// A card with this name is already in the deck.
    AlreadyInDeck { name: String },
    /// No empty slot left.
    DeckFull,
    /// Drop target already holds a card.
    SlotOccupied { index: usize },
    /// Nothing to remove.
    SlotEmpty { index: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::AlreadyInDeck { name } => write!(f, "{} is already in the deck", name),
            Rejection::DeckFull => write!(f, "deck is full"),
            Rejection::SlotOccupied { index } => write!(f, "slot {} is occupied", index),
            Rejection::SlotEmpty { index } => write!(f, "slot {} is empty", index),
        }
    }
}

/// Result of applying a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Applied,
    Rejected(Rejection),
}

impl CommandOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            CommandOutcome::Applied => None,
            CommandOutcome::Rejected(r) => Some(r),
        }
    }
}

impl DeckCommand {
    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DeckCommand::AddCard(_) => "add",
            DeckCommand::RemoveAt(_) => "remove",
            DeckCommand::Clear => "clear",
            DeckCommand::DropOnto { .. } => "drop",
        }
    }
}

/// Apply a command to a deck.
pub fn apply(slots: &mut DeckSlots, command: DeckCommand) -> Result<CommandOutcome, DeckError> {
    let kind = command.kind();
    let outcome = match command {
        DeckCommand::AddCard(card) => slots.add(card),
        DeckCommand::RemoveAt(index) => slots.remove(index)?,
        DeckCommand::Clear => slots.clear(),
        DeckCommand::DropOnto { card, slot } => slots.place(card, slot)?,
    };

    match &outcome {
        CommandOutcome::Applied => {
            tracing::trace!(command = kind, occupied = slots.occupied_count(), "deck command applied");
        }
        CommandOutcome::Rejected(reason) => {
            tracing::debug!(command = kind, reason = %reason, "deck command rejected");
        }
    }

    Ok(outcome)
}

impl DeckSlots {
    /// Apply a command to this deck. See [`apply`].
    pub fn apply(&mut self, command: DeckCommand) -> Result<CommandOutcome, DeckError> {
        apply(self, command)
    }
}
