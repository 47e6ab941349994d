//! Card catalog: the complete, immutable set of playable cards.
//!
//! The catalog validates its input once at construction and never changes
//! afterwards. Cards are stored in an `im::Vector` so handing the full list
//! to a sort view or an editor session is an O(1) clone.

use im::Vector;
use rustc_hash::FxHashMap;

use super::data;
use super::definition::{Card, CardId, CardRecord, MAX_ELIXIR, MIN_ELIXIR};
use crate::core::error::CatalogError;

/// Ordered, read-only card catalog.
///
/// ## Example
///
/// ```
/// use clash_hub::cards::{Catalog, CardRecord};
///
/// let catalog = Catalog::new(vec![
///     CardRecord::new("Knight", "knight.png", 3, 1),
///     CardRecord::new("Fireball", "fireball.png", 4, 2),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.resolve_name("fireball").unwrap().elixir, 4);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vector<Card>,
    by_name: FxHashMap<String, CardId>,
    /// Lowercased name -> first card with that folded name.
    by_folded: FxHashMap<String, CardId>,
}

impl Catalog {
    /// Build a catalog from records in insertion order.
    ///
    /// Fails on empty or duplicate names, elixir outside 1..=9, or a
    /// release order that does not strictly increase.
    pub fn new(records: impl IntoIterator<Item = CardRecord>) -> Result<Self, CatalogError> {
        let mut cards = Vector::new();
        let mut by_name = FxHashMap::default();
        let mut by_folded = FxHashMap::default();
        let mut previous: Option<u32> = None;

        for record in records {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if by_name.contains_key(&record.name) {
                return Err(CatalogError::DuplicateName(record.name));
            }
            if !(MIN_ELIXIR..=MAX_ELIXIR).contains(&record.elixir) {
                return Err(CatalogError::ElixirOutOfRange {
                    name: record.name,
                    elixir: record.elixir,
                });
            }
            if let Some(previous) = previous {
                if record.release_order <= previous {
                    return Err(CatalogError::ReleaseOrderNotIncreasing {
                        name: record.name,
                        order: record.release_order,
                        previous,
                    });
                }
            }
            previous = Some(record.release_order);

            let id = CardId::new(cards.len() as u32);
            by_name.insert(record.name.clone(), id);
            by_folded.entry(record.name.to_lowercase()).or_insert(id);
            cards.push_back(Card::from_record(id, record));
        }

        tracing::debug!(cards = cards.len(), "card catalog loaded");

        Ok(Self {
            cards,
            by_name,
            by_folded,
        })
    }

    /// Parse a catalog from a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The built-in card set.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::builtin_records()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "built-in card data is invalid");
            Self::empty()
        })
    }

    /// A catalog with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cards: Vector::new(),
            by_name: FxHashMap::default(),
            by_folded: FxHashMap::default(),
        }
    }

    /// Every card, in catalog order. Same result on every call.
    #[must_use]
    pub fn list_cards(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Look up a card by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// Look up a card by case-insensitive exact name.
    ///
    /// Surrounding whitespace is ignored. When two names fold to the same
    /// string the earlier card wins.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Card> {
        self.by_folded
            .get(&name.trim().to_lowercase())
            .and_then(|&id| self.get(id))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
