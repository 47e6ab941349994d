//! Card system: definitions, the catalog, and built-in data.
//!
//! ## Key Types
//!
//! - `CardId`: Position of a card in its catalog
//! - `CardRecord`: Card as read from a catalog source
//! - `Card`: Immutable catalog card (name, icon, elixir, release order)
//! - `Catalog`: Validated, ordered card set with name lookup
//!
//! The catalog is loaded once per session and passed explicitly to
//! whatever needs it.

pub mod catalog;
pub mod data;
pub mod definition;

pub use catalog::Catalog;
pub use definition::{Card, CardId, CardRecord, MAX_ELIXIR, MIN_ELIXIR};
