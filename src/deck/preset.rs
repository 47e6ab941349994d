//! Named deck lists (curated "top decks").
//!
//! A preset names its cards rather than holding them, so it can be written
//! down in data and checked against whatever catalog is loaded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::slots::DeckSlots;
use crate::cards::{Card, Catalog};
use crate::core::config::DECK_SIZE;
use crate::core::error::DeckError;

/// A named list of up to `DECK_SIZE` card names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPreset {
    pub name: String,
    pub cards: SmallVec<[String; DECK_SIZE]>,
}

impl DeckPreset {
    #[must_use]
    pub fn new<S: Into<String>>(name: impl Into<String>, cards: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Look up every card name (case-insensitive) in the catalog.
    pub fn resolve(&self, catalog: &Catalog) -> Result<SmallVec<[Card; DECK_SIZE]>, DeckError> {
        self.cards
            .iter()
            .map(|name| {
                catalog
                    .resolve_name(name)
                    .cloned()
                    .ok_or_else(|| DeckError::UnknownCard(name.clone()))
            })
            .collect()
    }
}

impl DeckSlots {
    /// Replace this deck with a preset's cards, in listed order.
    ///
    /// Nothing changes unless every name resolves and the list fits.
    pub fn load_preset(&mut self, preset: &DeckPreset, catalog: &Catalog) -> Result<(), DeckError> {
        let cards = preset.resolve(catalog)?;
        self.replace_all(cards)?;
        tracing::info!(preset = %preset.name, "deck preset loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CardRecord::new("Hog Rider", "", 4, 1),
            CardRecord::new("Fireball", "", 4, 2),
            CardRecord::new("The Log", "", 2, 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve() {
        let preset = DeckPreset::new("Mini", ["hog rider", "Fireball"]);
        let cards = preset.resolve(&catalog()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Hog Rider");
    }

    #[test]
    fn test_resolve_unknown() {
        let preset = DeckPreset::new("Broken", ["Hog Rider", "Mirror"]);
        assert_eq!(
            preset.resolve(&catalog()).unwrap_err(),
            DeckError::UnknownCard("Mirror".to_string())
        );
    }

    #[test]
    fn test_load_preset() {
        let catalog = catalog();
        let mut deck = DeckSlots::new();
        deck.add(catalog.find_by_name("The Log").unwrap().clone());

        deck.load_preset(&DeckPreset::new("Mini", ["Fireball", "Hog Rider"]), &catalog)
            .unwrap();

        assert_eq!(deck.occupied_count(), 2);
        assert_eq!(deck.position("Fireball"), Some(0));
        assert!(!deck.contains("The Log"));
    }

    #[test]
    fn test_load_preset_failure_keeps_deck() {
        let catalog = catalog();
        let mut deck = DeckSlots::new();
        deck.add(catalog.find_by_name("The Log").unwrap().clone());
        let before = deck.clone();

        assert!(deck
            .load_preset(&DeckPreset::new("Broken", ["Fireball", "Nope"]), &catalog)
            .is_err());
        assert!(deck
            .load_preset(&DeckPreset::new("Twice", ["Fireball", "fireball"]), &catalog)
            .is_err());
        assert_eq!(deck, before);
    }
}
