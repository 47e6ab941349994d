//! Deck slots: a fixed number of ordered positions, each empty or holding
//! one card.
//!
//! Invariant: no card name occupies more than one slot. Every mutation
//! checks it before touching the slots, so a rejected call leaves the deck
//! exactly as it was.
//!
//! Slots live in an `im::Vector`, so `clone()` is O(1) and callers can hand
//! snapshots to the rendering layer after each mutation.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::command::{CommandOutcome, Rejection};
use crate::cards::Card;
use crate::core::config::DECK_SIZE;
use crate::core::error::DeckError;

/// The eight slots of a deck under construction.
///
/// ## Example
///
/// ```
/// use clash_hub::cards::Catalog;
/// use clash_hub::deck::DeckSlots;
///
/// let catalog = Catalog::builtin();
/// let mut deck = DeckSlots::new();
///
/// deck.add(catalog.find_by_name("Knight").unwrap().clone());
/// deck.add(catalog.find_by_name("Knight").unwrap().clone()); // no-op
///
/// assert_eq!(deck.occupied_count(), 1);
/// assert!(deck.contains("Knight"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckSlots {
    slots: Vector<Option<Card>>,
}

impl Default for DeckSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSlots {
    /// Create an all-empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat(None).take(DECK_SIZE).collect(),
        }
    }

    /// Number of slots, always `DECK_SIZE`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Card in a slot. `None` for empty or out-of-range slots.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterate over all slots in order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Card>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Occupied cards in slot order.
    #[must_use]
    pub fn occupied(&self) -> SmallVec<[&Card; DECK_SIZE]> {
        self.slots.iter().flatten().collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True iff some occupied slot holds a card with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Slot index holding the named card.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|c| c.is_named(name)))
    }

    /// Lowest-indexed empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Put a card in the lowest-indexed empty slot.
    ///
    /// Rejected when the card's name is already in the deck (checked first)
    /// or when every slot is taken.
    pub fn add(&mut self, card: Card) -> CommandOutcome {
        if self.contains(&card.name) {
            return CommandOutcome::Rejected(Rejection::AlreadyInDeck { name: card.name });
        }
        match self.first_empty() {
            Some(index) => {
                self.slots.set(index, Some(card));
                CommandOutcome::Applied
            }
            None => CommandOutcome::Rejected(Rejection::DeckFull),
        }
    }

    /// Put a card in a specific slot, as a drag-and-drop does.
    ///
    /// Never overwrites: an occupied target is rejected. A duplicate name
    /// is rejected before slot occupancy is looked at.
    pub fn place(&mut self, card: Card, index: usize) -> Result<CommandOutcome, DeckError> {
        self.check_index(index)?;
        if self.contains(&card.name) {
            return Ok(CommandOutcome::Rejected(Rejection::AlreadyInDeck { name: card.name }));
        }
        if self.get(index).is_some() {
            return Ok(CommandOutcome::Rejected(Rejection::SlotOccupied { index }));
        }
        self.slots.set(index, Some(card));
        Ok(CommandOutcome::Applied)
    }

    /// Empty a slot.
    pub fn remove(&mut self, index: usize) -> Result<CommandOutcome, DeckError> {
        self.check_index(index)?;
        if self.get(index).is_none() {
            return Ok(CommandOutcome::Rejected(Rejection::SlotEmpty { index }));
        }
        self.slots.set(index, None);
        Ok(CommandOutcome::Applied)
    }

    /// Empty every slot.
    pub fn clear(&mut self) -> CommandOutcome {
        *self = Self::new();
        CommandOutcome::Applied
    }

    /// Replace the whole deck with `cards`, in slot order.
    ///
    /// All-or-nothing: on error the deck is untouched.
    pub fn replace_all(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<(), DeckError> {
        let mut next = Self::new();
        for (index, card) in cards.into_iter().enumerate() {
            if index >= next.capacity() {
                return Err(DeckError::TooManyCards {
                    count: index + 1,
                    capacity: next.capacity(),
                });
            }
            if next.contains(&card.name) {
                return Err(DeckError::DuplicateCard(card.name));
            }
            next.slots.set(index, Some(card));
        }
        *self = next;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), DeckError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(DeckError::InvalidIndex {
                index,
                capacity: self.capacity(),
            })
        }
    }
}
