//! The 52-card universe and a simple dealer over it.
//!
//! The odds engine only needs the set of cards not yet accounted for; the
//! deck provides it (`Deck::without`) and also deals random spots for
//! tests and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::{Card, CardMask, DECK_SIZE};

/// A deck of playing cards with dealing functionality.
#[derive(Clone)]
pub struct Deck {
    /// Usable cards in current order.
    cards: Vec<Card>,
    /// Index of next card to deal.
    index: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
            index: 0,
        }
    }

    /// Create a deck with specific cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let dead = CardMask::from_cards(dead_cards);
        Self {
            cards: Card::all().filter(|&card| !dead.contains(card)).collect(),
            index: 0,
        }
    }

    /// Shuffle the remaining cards in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        let card = *self.cards.get(self.index)?;
        self.index += 1;
        Some(card)
    }

    /// Deal up to `n` cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        std::iter::from_fn(|| self.deal()).take(n).collect()
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    /// Get remaining cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.index..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({}/{} remaining)", self.remaining(), DECK_SIZE)
    }
}
