//! Best-hand selection from hole and board cards.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::classify::{classify_unchecked, HAND_SIZE};
use super::combinations::combinations;
use super::hand::Hand;
use super::hand_type::HandType;
use super::ranking::compare_hands;
use crate::cards::{Card, CardMask};
use crate::error::PokerError;

/// The best hand a set of cards can make.
///
/// When several distinct subsets tie exactly (same type and tiebreak
/// vector) all of them are kept. Deserialization rejects an empty list or
/// hands that do not tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BestHandRepr")]
pub struct BestHand {
    hands: Vec<Hand>,
}

impl BestHand {
    /// One of the best hands (the first subset found).
    pub fn hand(&self) -> &Hand {
        &self.hands[0]
    }

    /// Every subset making the best hand.
    pub fn ties(&self) -> &[Hand] {
        &self.hands
    }

    /// Type of the best hand.
    pub fn hand_type(&self) -> HandType {
        self.hand().hand_type()
    }

    /// Description of the best hand.
    pub fn describe(&self) -> String {
        self.hand().describe()
    }
}

#[derive(Deserialize)]
struct BestHandRepr {
    hands: Vec<Hand>,
}

impl TryFrom<BestHandRepr> for BestHand {
    type Error = PokerError;

    fn try_from(repr: BestHandRepr) -> Result<Self, Self::Error> {
        let first = repr
            .hands
            .first()
            .ok_or_else(|| PokerError::InvalidHand("empty best hand".to_string()))?;
        if repr
            .hands
            .iter()
            .any(|h| compare_hands(h, first) != Ordering::Equal)
        {
            return Err(PokerError::InvalidHand("best hands do not tie".to_string()));
        }
        Ok(Self { hands: repr.hands })
    }
}

/// Find the best hand from a player's hole cards and the board.
///
/// Hole and board may total anywhere from one to seven cards. With fewer
/// than five cards the hand shrinks to the cards available.
///
/// # Errors
/// `InsufficientCards` when no card is given, `DuplicateCard` when a card
/// appears twice.
pub fn find_best_hand(hole: &[Card], board: &[Card]) -> Result<BestHand, PokerError> {
    let cards: Vec<Card> = hole.iter().chain(board).copied().collect();
    if cards.is_empty() {
        return Err(PokerError::InsufficientCards {
            needed: 1,
            available: 0,
        });
    }
    CardMask::try_from_cards(&cards)?;
    Ok(best_of(&cards))
}

/// Best hand of a non-empty set of distinct cards.
pub(crate) fn best_of(cards: &[Card]) -> BestHand {
    debug_assert!(!cards.is_empty());
    let size = cards.len().min(HAND_SIZE);

    let mut best: Vec<Hand> = Vec::new();
    for subset in combinations(cards, size) {
        let hand = classify_unchecked(&subset);
        match best.first().map(|b| compare_hands(&hand, b)) {
            None | Some(Ordering::Greater) => best = vec![hand],
            Some(Ordering::Equal) => best.push(hand),
            Some(Ordering::Less) => {}
        }
    }

    BestHand { hands: best }
}
