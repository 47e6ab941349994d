//! Card definitions - static catalog data.
//!
//! A `Card` is immutable once it is in a catalog. Decks hold clones of
//! catalog cards and compare them by `name`.

use serde::{Deserialize, Serialize};

/// Lowest legal elixir cost.
pub const MIN_ELIXIR: u8 = 1;

/// Highest legal elixir cost.
pub const MAX_ELIXIR: u8 = 9;

/// Position of a card in its catalog.
///
/// Assigned by the catalog in insertion order, so ids are only meaningful
/// relative to the catalog that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card as supplied by a catalog source, before the catalog assigns an id.
///
/// Field names follow the catalog JSON (`iconUrl`, `releaseOrder`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub name: String,
    pub icon_url: String,
    pub elixir: u8,
    pub release_order: u32,
}

impl CardRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, icon_url: impl Into<String>, elixir: u8, release_order: u32) -> Self {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
            elixir,
            release_order,
        }
    }
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use clash_hub::cards::Catalog;
///
/// let catalog = Catalog::builtin();
/// let hog = catalog.find_by_name("Hog Rider").unwrap();
/// assert_eq!(hog.elixir, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Catalog position.
    pub id: CardId,

    /// Unique display name; the deck membership key.
    pub name: String,

    /// Opaque icon reference, never interpreted here.
    pub icon_url: String,

    /// Elixir cost, 1..=9.
    pub elixir: u8,

    /// Strictly increasing with catalog order. Only used for sorting.
    pub release_order: u32,
}

impl Card {
    pub(crate) fn from_record(id: CardId, record: CardRecord) -> Self {
        Self {
            id,
            name: record.name,
            icon_url: record.icon_url,
            elixir: record.elixir,
            release_order: record.release_order,
        }
    }

    /// Check whether this card has the given name (exact match).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.elixir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_record_json_field_names() {
        let record: CardRecord = serde_json::from_str(
            r#"{ "name": "Zap", "iconUrl": "zap.png", "elixir": 2, "releaseOrder": 7 }"#,
        )
        .unwrap();

        assert_eq!(record, CardRecord::new("Zap", "zap.png", 2, 7));
    }

    #[test]
    fn test_card_from_record() {
        let card = Card::from_record(CardId::new(3), CardRecord::new("Knight", "knight.png", 3, 1));
        assert_eq!(card.id, CardId::new(3));
        assert!(card.is_named("Knight"));
        assert!(!card.is_named("knight"));
        assert_eq!(card.to_string(), "Knight (3)");
    }
}
