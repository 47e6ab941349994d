//! Derived deck statistics.
//!
//! Stats are never stored on the deck; they are recomputed from the slots
//! after every applied mutation.
//!
//! The average is kept in tenths of elixir as an integer, rounded half up
//! from the exact ratio. With at most eight cards every representable tie
//! is exact, so this matches rounding the real quotient to one decimal.

use serde::{Deserialize, Serialize};

use super::slots::DeckSlots;

/// Aggregate metrics over the occupied slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Number of occupied slots.
    pub card_count: usize,

    /// Sum of elixir over occupied slots.
    pub total_elixir: u32,

    average_tenths: u32,
}

impl DeckStats {
    /// Compute stats for the current slots.
    #[must_use]
    pub fn compute(slots: &DeckSlots) -> Self {
        let occupied = slots.occupied();
        let card_count = occupied.len();
        let total_elixir: u32 = occupied.iter().map(|c| u32::from(c.elixir)).sum();

        let average_tenths = if card_count == 0 {
            0
        } else {
            let count = card_count as u32;
            // round(total * 10 / count), ties up
            (total_elixir * 20 + count) / (count * 2)
        };

        Self {
            card_count,
            total_elixir,
            average_tenths,
        }
    }

    /// Average elixir rounded to one decimal place. 0 for an empty deck.
    #[must_use]
    pub fn average_elixir(&self) -> f64 {
        f64::from(self.average_tenths) / 10.0
    }

    /// Average elixir in tenths (`36` means 3.6).
    #[must_use]
    pub fn average_elixir_tenths(&self) -> u32 {
        self.average_tenths
    }

    /// Display form: one decimal digit, or the bare `0` for an empty deck.
    #[must_use]
    pub fn average_elixir_label(&self) -> String {
        if self.card_count == 0 {
            "0".to_string()
        } else {
            format!("{}.{}", self.average_tenths / 10, self.average_tenths % 10)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }
}

/// Compute stats for a deck. Same as [`DeckStats::compute`].
#[must_use]
pub fn compute_stats(slots: &DeckSlots) -> DeckStats {
    DeckStats::compute(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardRecord};

    fn deck_of(elixirs: &[u8]) -> DeckSlots {
        let mut deck = DeckSlots::new();
        for (i, &elixir) in elixirs.iter().enumerate() {
            let record = CardRecord::new(format!("Card {}", i), "", elixir, i as u32 + 1);
            deck.add(Card::from_record(CardId::new(i as u32), record));
        }
        deck
    }

    #[test]
    fn test_empty_deck_is_zero() {
        let stats = compute_stats(&DeckSlots::new());
        assert_eq!(stats.average_elixir(), 0.0);
        assert_eq!(stats.average_elixir_label(), "0");
        assert!(stats.is_empty());
    }

    #[test]
    fn test_simple_average() {
        let stats = compute_stats(&deck_of(&[2, 4, 6]));
        assert_eq!(stats.card_count, 3);
        assert_eq!(stats.total_elixir, 12);
        assert_eq!(stats.average_elixir(), 4.0);
        assert_eq!(stats.average_elixir_label(), "4.0");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 29 / 8 = 3.625
        let stats = compute_stats(&deck_of(&[4, 4, 3, 1, 2, 3, 4, 8]));
        assert_eq!(stats.average_elixir_tenths(), 36);
        assert_eq!(stats.average_elixir_label(), "3.6");

        // 10 / 3 = 3.333...
        let stats = compute_stats(&deck_of(&[3, 3, 4]));
        assert_eq!(stats.average_elixir_label(), "3.3");

        // 11 / 3 = 3.666...
        let stats = compute_stats(&deck_of(&[3, 4, 4]));
        assert_eq!(stats.average_elixir_label(), "3.7");
    }

    #[test]
    fn test_exact_tie_rounds_up() {
        // 33 / 4 = 8.25
        let stats = compute_stats(&deck_of(&[9, 8, 8, 8]));
        assert_eq!(stats.average_elixir_label(), "8.3");
    }

    #[test]
    fn test_ignores_empty_slots() {
        let mut deck = deck_of(&[2, 9, 4]);
        deck.remove(1).unwrap();

        let stats = compute_stats(&deck);
        assert_eq!(stats.card_count, 2);
        assert_eq!(stats.average_elixir_label(), "3.0");
    }
}
