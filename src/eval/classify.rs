//! Hand classification for a single card subset.
//!
//! `HandType::qualifies` answers "is this subset a hand of that type, and
//! with which tiebreak values?". `classify` asks every type from strongest
//! to weakest and keeps the first answer, so each subset has exactly one
//! strongest classification.

use std::borrow::Borrow;

use super::hand::{Hand, Tiebreak};
use super::hand_type::HandType;
use crate::cards::{Card, RANK_2, RANK_5, RANK_A};
use crate::error::PokerError;

/// Cards in a full hand.
pub const HAND_SIZE: usize = 5;

/// Rank and suit counts of a subset.
struct Profile {
    /// Occurrences per rank, indexed by rank (2-14).
    rank_counts: [u8; 15],
    /// Ranks of all cards, highest first.
    ranks: Vec<u8>,
    len: usize,
    suited: bool,
}

impl Profile {
    fn new<C: Borrow<Card>>(cards: &[C]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut ranks = Vec::with_capacity(cards.len());
        for card in cards {
            let card = card.borrow();
            rank_counts[card.rank() as usize] += 1;
            ranks.push(card.rank());
        }
        ranks.sort_by(|a, b| b.cmp(a));

        let first_suit = cards.first().map(|c| c.borrow().suit());
        let suited = cards.iter().all(|c| Some(c.borrow().suit()) == first_suit);

        Self {
            rank_counts,
            ranks,
            len: cards.len(),
            suited,
        }
    }

    /// Highest rank occurring at least `count` times, other than `except`.
    fn highest_with(&self, count: u8, except: &[u8]) -> Option<u8> {
        (RANK_2..=RANK_A)
            .rev()
            .find(|r| self.rank_counts[*r as usize] >= count && !except.contains(r))
    }

    /// Ranks of the cards outside `used`, highest first, padded to `n`.
    fn kickers(&self, used: &[u8], n: usize) -> Tiebreak {
        let mut kickers: Tiebreak = self
            .ranks
            .iter()
            .filter(|r| !used.contains(*r))
            .take(n)
            .map(|&r| Some(r))
            .collect();
        kickers.resize(n, None);
        kickers
    }

    /// Top card of a five-card run, with the wheel topping out at 5.
    fn straight_top(&self) -> Option<u8> {
        if self.len != HAND_SIZE || self.rank_counts.iter().any(|&c| c > 1) {
            return None;
        }
        let (high, low) = (self.ranks[0], self.ranks[HAND_SIZE - 1]);
        if high - low == 4 {
            Some(high)
        } else if self.ranks == [RANK_A, 5, 4, 3, 2] {
            Some(RANK_5)
        } else {
            None
        }
    }

    fn is_flush(&self) -> bool {
        self.len == HAND_SIZE && self.suited
    }

    fn all_ranks(&self) -> Tiebreak {
        self.kickers(&[], HAND_SIZE)
    }
}

impl HandType {
    /// Check whether `cards` form a hand of this type and extract the
    /// tiebreak vector if so.
    ///
    /// Straights, flushes, straight flushes and full houses need exactly
    /// five cards. For n-of-a-kind types the highest qualifying rank is
    /// used. A subset can qualify for several types (a full house also
    /// holds trips); `classify` picks the strongest.
    pub fn qualifies<C: Borrow<Card>>(self, cards: &[C]) -> Option<Tiebreak> {
        if cards.is_empty() || (self.needs_full_hand() && cards.len() != HAND_SIZE) {
            return None;
        }
        let p = Profile::new(cards);
        match self {
            HandType::StraightFlush => {
                let top = p.straight_top().filter(|_| p.is_flush())?;
                Some(vec![Some(top)])
            }
            HandType::Quads => {
                let quad = p.highest_with(4, &[])?;
                let mut tb = vec![Some(quad)];
                tb.extend(p.kickers(&[quad], 1));
                Some(tb)
            }
            HandType::FullHouse => {
                let trips = p.highest_with(3, &[])?;
                let pair = p.highest_with(2, &[trips])?;
                Some(vec![Some(trips), Some(pair)])
            }
            HandType::Flush => p.is_flush().then(|| p.all_ranks()),
            HandType::Straight => {
                let top = p.straight_top()?;
                Some(vec![Some(top)])
            }
            HandType::Trips => {
                let trips = p.highest_with(3, &[])?;
                let mut tb = vec![Some(trips)];
                tb.extend(p.kickers(&[trips], 2));
                Some(tb)
            }
            HandType::TwoPair => {
                let high = p.highest_with(2, &[])?;
                let low = p.highest_with(2, &[high])?;
                let mut tb = vec![Some(high), Some(low)];
                tb.extend(p.kickers(&[high, low], 1));
                Some(tb)
            }
            HandType::Pair => {
                let pair = p.highest_with(2, &[])?;
                let mut tb = vec![Some(pair)];
                tb.extend(p.kickers(&[pair], 3));
                Some(tb)
            }
            HandType::HighCard => Some(p.all_ranks()),
        }
    }
}

/// Classify a subset of one to five cards as its strongest hand type.
///
/// # Errors
/// `InsufficientCards` for an empty subset, `TooManyCards` for more than
/// five cards; use `find_best_hand` for six or seven.
pub fn classify<C: Borrow<Card>>(cards: &[C]) -> Result<Hand, PokerError> {
    if cards.is_empty() {
        return Err(PokerError::InsufficientCards {
            needed: 1,
            available: 0,
        });
    }
    if cards.len() > HAND_SIZE {
        return Err(PokerError::TooManyCards {
            max: HAND_SIZE,
            available: cards.len(),
        });
    }
    Ok(classify_unchecked(cards))
}

/// Classification for a subset already known to hold 1-5 cards.
pub(crate) fn classify_unchecked<C: Borrow<Card>>(cards: &[C]) -> Hand {
    for hand_type in HandType::ALL {
        if let Some(tiebreak) = hand_type.qualifies(cards) {
            return Hand::new(cards, hand_type, tiebreak);
        }
    }
    unreachable!("every non-empty subset qualifies as a high card")
}


/// Nine-card samples: two fixed deals that hold every hand type between
/// them, then deals from seeded decks.
#[cfg(test)]
pub(crate) fn nine_card_samples() -> Vec<Vec<Card>> {
    use crate::cards::Deck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut samples: Vec<Vec<Card>> = ["Ah Kh Qh Jh Th Ad Ac As 9c", "Kc Kd Ks Qc Qd 2c 3c 4c 9c"]
        .iter()
        .filter_map(|s| Card::parse_many(s).ok())
        .collect();
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        samples.push(deck.deal_n(9));
    }
    samples
}
