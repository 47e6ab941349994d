//! Generator output: parsing and resolving against the catalog.
//!
//! Models often wrap JSON in a markdown code fence, so parsing looks for a
//! fenced block first and falls back to the raw text. Resolution never
//! fails as a whole; names that do not match a catalog card become
//! `ResolvedCard::Unknown` placeholders.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Catalog};
use crate::core::config::DECK_SIZE;
use crate::core::error::SuggestionError;

/// Structured suggestion as returned by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub deck_name: String,
    /// Card names, expected to be eight.
    pub cards: Vec<String>,
    pub overview: String,
    pub pros: String,
    pub cons: String,
}

/// One suggested card after catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedCard {
    Known(Card),
    /// Name as the generator wrote it; rendered as a marked placeholder.
    Unknown(String),
}

impl ResolvedCard {
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, ResolvedCard::Known(_))
    }

    /// Name to show: the catalog name when known, the raw name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            ResolvedCard::Known(card) => &card.name,
            ResolvedCard::Unknown(name) => name,
        }
    }
}

/// A suggestion with every card name looked up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSuggestion {
    pub deck_name: String,
    pub cards: SmallVec<[ResolvedCard; DECK_SIZE]>,
    pub overview: String,
    pub pros: String,
    pub cons: String,
}

impl ResolvedSuggestion {
    /// Number of names that did not match a catalog card.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_known()).count()
    }

    /// Catalog cards only, in suggested order.
    pub fn known_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter_map(|c| match c {
            ResolvedCard::Known(card) => Some(card),
            ResolvedCard::Unknown(_) => None,
        })
    }
}

impl Suggestion {
    /// Look up each card name (case-insensitive exact match).
    #[must_use]
    pub fn resolve(self, catalog: &Catalog) -> ResolvedSuggestion {
        if self.cards.len() != DECK_SIZE {
            tracing::warn!(
                deck = %self.deck_name,
                count = self.cards.len(),
                "suggestion does not list {} cards",
                DECK_SIZE
            );
        }

        let cards = self
            .cards
            .into_iter()
            .map(|name| match catalog.resolve_name(&name) {
                Some(card) => ResolvedCard::Known(card.clone()),
                None => {
                    tracing::warn!(card = %name, "suggested card not in catalog");
                    ResolvedCard::Unknown(name)
                }
            })
            .collect();

        ResolvedSuggestion {
            deck_name: self.deck_name,
            cards,
            overview: self.overview,
            pros: self.pros,
            cons: self.cons,
        }
    }
}

/// Parse generator output into a `Suggestion`.
pub fn parse_suggestion(text: &str) -> Result<Suggestion, SuggestionError> {
    if text.trim().is_empty() {
        return Err(SuggestionError::EmptyResponse);
    }

    let json = extract_json(text);
    serde_json::from_str(json).map_err(|e| {
        tracing::warn!(
            json_error = %e,
            preview = %json.chars().take(200).collect::<String>(),
            "failed to parse suggestion"
        );
        SuggestionError::Malformed(e)
    })
}

/// The JSON body of a response: the first fenced block if there is one
/// (any info string on the opening fence line is skipped), else the text.
fn extract_json(text: &str) -> &str {
    let text = text.trim();
    let Some((_, after_fence)) = text.split_once("```") else {
        return text;
    };
    let body = after_fence.split_once('\n').map_or(after_fence, |(_, body)| body);
    match body.split_once("```") {
        Some((json, _)) => json.trim(),
        None => text,
    }
}
