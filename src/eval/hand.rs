//! Classified hands and their human-readable description.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::classify::classify;
use super::hand_type::HandType;
use crate::cards::{rank_name, rank_plural, Card, CardMask, RANK_5, RANK_A};
use crate::error::PokerError;

/// Tiebreak vector: rank values compared lexicographically, highest first.
///
/// Its length is fixed per hand type (`HandType::tiebreak_len`). Slots a
/// short hand cannot fill hold `None`, which orders below every rank.
pub type Tiebreak = Vec<Option<u8>>;

/// A classified hand of at most five cards.
///
/// Cards are sorted on construction (highest rank first, with the ace
/// moved last in an ace-low straight) and never change afterwards.
///
/// Deserialization re-classifies the cards and rejects a type or tiebreak
/// that does not match them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HandRepr")]
pub struct Hand {
    cards: Vec<Card>,
    hand_type: HandType,
    tiebreak: Tiebreak,
}

impl Hand {
    /// Build a hand from its cards, type and tiebreak vector.
    pub(crate) fn new<C: Borrow<Card>>(cards: &[C], hand_type: HandType, tiebreak: Tiebreak) -> Self {
        debug_assert_eq!(tiebreak.len(), hand_type.tiebreak_len());
        let mut cards: Vec<Card> = cards.iter().map(|c| *c.borrow()).collect();
        cards.sort_by(|a, b| b.cmp(a));

        let is_run = matches!(hand_type, HandType::Straight | HandType::StraightFlush);
        if is_run && tiebreak.first() == Some(&Some(RANK_5)) {
            // the ace plays low in the wheel
            cards.rotate_left(1);
        }

        Self {
            cards,
            hand_type,
            tiebreak,
        }
    }

    /// The cards making up the hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand's type.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// Numeric strength (1-9, 9 = best).
    pub fn strength(&self) -> u8 {
        self.hand_type.strength()
    }

    /// The tiebreak vector.
    pub fn tiebreak(&self) -> &[Option<u8>] {
        &self.tiebreak
    }

    /// Human-readable description, see [`describe_hand`].
    pub fn describe(&self) -> String {
        describe_hand(self)
    }
}

/// Unchecked wire form of a `Hand`.
#[derive(Deserialize)]
struct HandRepr {
    cards: Vec<Card>,
    hand_type: HandType,
    tiebreak: Tiebreak,
}

impl TryFrom<HandRepr> for Hand {
    type Error = PokerError;

    fn try_from(repr: HandRepr) -> Result<Self, Self::Error> {
        CardMask::try_from_cards(&repr.cards)?;
        let hand = classify(&repr.cards)?;
        if hand.hand_type != repr.hand_type || hand.tiebreak != repr.tiebreak {
            return Err(PokerError::InvalidHand(format!(
                "{:?} is {} {:?}, not {} {:?}",
                repr.cards, hand.hand_type, hand.tiebreak, repr.hand_type, repr.tiebreak
            )));
        }
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", describe_hand(self))?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

/// Describe a hand, e.g. `"Full House (Tens full of Fours)"`.
pub fn describe_hand(hand: &Hand) -> String {
    let slot = |i: usize| hand.tiebreak.get(i).copied().flatten();
    let single = |i: usize| slot(i).map(rank_name).unwrap_or("?");
    let plural = |i: usize| slot(i).map(rank_plural).unwrap_or("?");

    match hand.hand_type {
        HandType::StraightFlush if slot(0) == Some(RANK_A) => "Royal Flush".to_string(),
        HandType::StraightFlush => format!("Straight Flush ({} high)", single(0)),
        HandType::Quads => format!("Four of a Kind ({})", plural(0)),
        HandType::FullHouse => format!("Full House ({} full of {})", plural(0), plural(1)),
        HandType::Flush => format!("Flush ({} high)", single(0)),
        HandType::Straight => format!("Straight ({} high)", single(0)),
        HandType::Trips => format!("Three of a Kind ({})", plural(0)),
        HandType::TwoPair => format!("Two Pair ({} and {})", plural(0), plural(1)),
        HandType::Pair => format!("Pair ({})", plural(0)),
        HandType::HighCard => format!("High Card ({})", single(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &str, hand_type: HandType, tiebreak: &[u8]) -> Hand {
        let cards = Card::parse_many(cards).unwrap();
        let mut tb: Tiebreak = tiebreak.iter().map(|&r| Some(r)).collect();
        tb.resize(hand_type.tiebreak_len(), None);
        Hand::new(&cards, hand_type, tb)
    }

    #[test]
    fn test_cards_sorted_on_construction() {
        let h = hand("2c Kd 9h Kc 5s", HandType::Pair, &[13, 9, 5, 2]);
        let ranks: Vec<u8> = h.cards().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![13, 13, 9, 5, 2]);
    }

    #[test]
    fn test_wheel_puts_ace_last() {
        let h = hand("Ah 2c 3d 4s 5h", HandType::Straight, &[5]);
        assert_eq!(h.cards()[0].rank(), 5);
        assert_eq!(h.cards()[4].rank(), RANK_A);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            hand("Th Td Tc 4s 4h", HandType::FullHouse, &[10, 4]).describe(),
            "Full House (Tens full of Fours)"
        );
        assert_eq!(
            hand("6h 7h 8h 9h Th", HandType::StraightFlush, &[10]).describe(),
            "Straight Flush (Ten high)"
        );
        assert_eq!(
            hand("Ah Kh Qh Jh Th", HandType::StraightFlush, &[14]).describe(),
            "Royal Flush"
        );
        assert_eq!(
            hand("Ah 2c 3d 4s 5h", HandType::Straight, &[5]).describe(),
            "Straight (Five high)"
        );
        assert_eq!(
            hand("Kh Kd 4c 4s 9h", HandType::TwoPair, &[13, 4, 9]).describe(),
            "Two Pair (Kings and Fours)"
        );
        assert_eq!(hand("Ah 7d", HandType::HighCard, &[14, 7]).describe(), "High Card (Ace)");
        assert_eq!(hand("6h 6d", HandType::Pair, &[6]).describe(), "Pair (Sixes)");
    }

    #[test]
    fn test_deserialize_reclassifies() {
        let h = hand("Kh Kd 4c 4s 9h", HandType::TwoPair, &[13, 4, 9]);
        let back: Hand = serde_json::from_str(&serde_json::to_string(&h).unwrap()).unwrap();
        assert_eq!(back, h);

        // tiebreak too short for the type
        let short = r#"{"cards":["Kh","Kd","4c","4s","9h"],"hand_type":"TwoPair","tiebreak":[13]}"#;
        assert!(serde_json::from_str::<Hand>(short).is_err());
        // wrong type for the cards
        let wrong = r#"{"cards":["Kh","Kd","4c","4s","9h"],"hand_type":"Trips","tiebreak":[13,4,9]}"#;
        assert!(serde_json::from_str::<Hand>(wrong).is_err());
        let empty = r#"{"cards":[],"hand_type":"HighCard","tiebreak":[null,null,null,null,null]}"#;
        assert!(serde_json::from_str::<Hand>(empty).is_err());
        let dup = r#"{"cards":["Kh","Kh"],"hand_type":"Pair","tiebreak":[13,null,null,null]}"#;
        assert!(serde_json::from_str::<Hand>(dup).is_err());
    }

    #[test]
    fn test_display_lists_cards() {
        let h = hand("9s 9h 9d 9c 2h", HandType::Quads, &[9, 2]);
        assert_eq!(h.to_string(), "Four of a Kind (Nines) [9s 9h 9d 9c 2h]");
    }
}
