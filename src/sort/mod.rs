//! Catalog sort view.
//!
//! Pure presentation: derives an ordering of the full catalog from a
//! `SortState`. Deck contents play no part.

pub mod view;

pub use view::{compare_by, compare_names, sort_cards, SortCriterion, SortDirection, SortState};
