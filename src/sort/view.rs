//! Catalog ordering for display.
//!
//! `sort_cards` returns every catalog card (never filtered) ordered by a
//! criterion. Descending order negates the comparator instead of reversing
//! the output, and the sort is stable, so cards with equal keys keep their
//! catalog order in both directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Catalog};

/// What to order the catalog by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    #[default]
    Elixir,
    Alphabetic,
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Presentation state of a catalog view. Never affects a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub criterion: SortCriterion,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub fn new(criterion: SortCriterion, direction: SortDirection) -> Self {
        Self {
            criterion,
            direction,
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Compare two cards under this state.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        self.direction.apply(compare_by(self.criterion, a, b))
    }
}

/// Ascending comparison for a criterion.
#[must_use]
pub fn compare_by(criterion: SortCriterion, a: &Card, b: &Card) -> Ordering {
    match criterion {
        SortCriterion::Elixir => a.elixir.cmp(&b.elixir),
        SortCriterion::Alphabetic => compare_names(&a.name, &b.name),
        SortCriterion::Release => a.release_order.cmp(&b.release_order),
    }
}

/// Name collation: case-folded first, so "bats" sorts with "Bats". Names
/// that fold equal put lowercase first ("zap" before "Zap"), which keeps the
/// order total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Order the whole catalog.
///
/// ## Example
///
/// ```
/// use clash_hub::cards::{Catalog, CardRecord};
/// use clash_hub::sort::{sort_cards, SortCriterion, SortDirection};
///
/// let catalog = Catalog::new(vec![
///     CardRecord::new("Fireball", "", 4, 1),
///     CardRecord::new("Goblin Barrel", "", 3, 2),
///     CardRecord::new("Hog Rider", "", 4, 3),
/// ])
/// .unwrap();
///
/// let names: Vec<_> = sort_cards(&catalog, SortCriterion::Alphabetic, SortDirection::Descending)
///     .iter()
///     .map(|c| c.name.as_str())
///     .collect();
/// assert_eq!(names, ["Hog Rider", "Goblin Barrel", "Fireball"]);
/// ```
#[must_use]
pub fn sort_cards(catalog: &Catalog, criterion: SortCriterion, direction: SortDirection) -> Vec<&Card> {
    let state = SortState::new(criterion, direction);
    let mut cards: Vec<&Card> = catalog.iter().collect();
    cards.sort_by(|a, b| state.compare(a, b));
    cards
}
