//! Deck editor session.
//!
//! Owns one deck, one sort state and the drag-in-progress for a single
//! user. UI input arrives as `EditorEvent`s; each event either changes
//! presentation state or is turned into a `DeckCommand` and run through
//! the deck reducer. Stats are recomputed after every applied command, so
//! a read after any `handle` call always sees a consistent deck and stats.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Catalog};
use crate::core::config::EditorConfig;
use crate::core::error::DeckError;
use crate::deck::{CommandOutcome, DeckCommand, DeckPreset, DeckSlots, DeckStats};
use crate::sort::{sort_cards, SortCriterion, SortState};

/// Discrete user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// A catalog card was picked up.
    DragStart(CardId),
    /// The drag was abandoned without a drop.
    DragEnd,
    /// The picked-up card was released over a slot.
    Drop { slot: usize },
    /// A catalog card was clicked.
    CatalogClick(CardId),
    /// A deck slot was clicked.
    SlotClick(usize),
    ClearDeck,
    SetSortCriterion(SortCriterion),
    ToggleSortDirection,
}

/// Where a catalog card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardMembership {
    Available,
    InDeck(usize),
}

/// A single user's deck-building session.
///
/// ## Example
///
/// ```
/// use clash_hub::cards::Catalog;
/// use clash_hub::core::EditorConfig;
/// use clash_hub::editor::{DeckEditor, EditorEvent};
///
/// let catalog = Catalog::builtin();
/// let mut editor = DeckEditor::new(&catalog, &EditorConfig::default());
///
/// let hog = catalog.find_by_name("Hog Rider").unwrap().id;
/// editor.handle(EditorEvent::DragStart(hog)).unwrap();
/// editor.handle(EditorEvent::Drop { slot: 3 }).unwrap();
///
/// assert_eq!(editor.slots().get(3).unwrap().name, "Hog Rider");
/// assert_eq!(editor.stats().average_elixir_label(), "4.0");
/// ```
#[derive(Clone, Debug)]
pub struct DeckEditor<'c> {
    catalog: &'c Catalog,
    slots: DeckSlots,
    sort: SortState,
    dragged: Option<CardId>,
    stats: DeckStats,
}

impl<'c> DeckEditor<'c> {
    /// Start a session with an empty deck.
    #[must_use]
    pub fn new(catalog: &'c Catalog, config: &EditorConfig) -> Self {
        Self {
            catalog,
            slots: DeckSlots::new(),
            sort: config.initial_sort,
            dragged: None,
            stats: DeckStats::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn slots(&self) -> &DeckSlots {
        &self.slots
    }

    /// O(1) copy of the current deck for rendering.
    #[must_use]
    pub fn snapshot(&self) -> DeckSlots {
        self.slots.clone()
    }

    #[must_use]
    pub fn stats(&self) -> DeckStats {
        self.stats
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Card currently being dragged.
    #[must_use]
    pub fn dragged(&self) -> Option<&'c Card> {
        self.dragged.and_then(|id| self.catalog.get(id))
    }

    /// Catalog in the current sort order.
    #[must_use]
    pub fn sorted_cards(&self) -> Vec<&'c Card> {
        sort_cards(self.catalog, self.sort.criterion, self.sort.direction)
    }

    /// Whether a catalog card is in the deck.
    #[must_use]
    pub fn card_state(&self, card: &Card) -> CardMembership {
        match self.slots.position(&card.name) {
            Some(slot) => CardMembership::InDeck(slot),
            None => CardMembership::Available,
        }
    }

    /// The clear button only does something on a non-empty deck.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Handle one input event.
    ///
    /// Returns the deck command outcome when the event reached the deck,
    /// `None` for events that only touch presentation or drag state.
    pub fn handle(&mut self, event: EditorEvent) -> Result<Option<CommandOutcome>, DeckError> {
        match event {
            EditorEvent::DragStart(id) => {
                self.lookup(id)?;
                self.dragged = Some(id);
                Ok(None)
            }
            EditorEvent::DragEnd => {
                self.dragged = None;
                Ok(None)
            }
            EditorEvent::Drop { slot } => {
                let Some(id) = self.dragged.take() else {
                    return Ok(None);
                };
                let card = self.lookup(id)?.clone();
                self.dispatch(DeckCommand::DropOnto { card, slot }).map(Some)
            }
            EditorEvent::CatalogClick(id) => {
                let card = self.lookup(id)?.clone();
                self.dispatch(DeckCommand::AddCard(card)).map(Some)
            }
            EditorEvent::SlotClick(index) => self.dispatch(DeckCommand::RemoveAt(index)).map(Some),
            EditorEvent::ClearDeck => self.dispatch(DeckCommand::Clear).map(Some),
            EditorEvent::SetSortCriterion(criterion) => {
                self.sort.criterion = criterion;
                Ok(None)
            }
            EditorEvent::ToggleSortDirection => {
                self.sort.toggle_direction();
                Ok(None)
            }
        }
    }

    /// Run a deck command and refresh stats if it changed the deck.
    pub fn dispatch(&mut self, command: DeckCommand) -> Result<CommandOutcome, DeckError> {
        let is_clear = matches!(command, DeckCommand::Clear);
        let outcome = self.slots.apply(command)?;
        if outcome.is_applied() {
            self.stats = DeckStats::compute(&self.slots);
            if is_clear {
                tracing::info!("deck cleared");
            }
        }
        Ok(outcome)
    }

    /// Replace the deck with a preset.
    pub fn load_preset(&mut self, preset: &DeckPreset) -> Result<(), DeckError> {
        self.slots.load_preset(preset, self.catalog)?;
        self.stats = DeckStats::compute(&self.slots);
        Ok(())
    }

    fn lookup(&self, id: CardId) -> Result<&'c Card, DeckError> {
        self.catalog
            .get(id)
            .ok_or_else(|| DeckError::UnknownCard(id.to_string()))
    }
}
