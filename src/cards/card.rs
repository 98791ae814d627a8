//! Card representation for Hold'em evaluation.
//!
//! This module provides the card types consumed by the evaluator and the
//! odds engine:
//! - `Card`: A single playing card with rank (2-14) and suit
//! - `CardMask`: A set of cards packed into a 64-bit mask
//! - `HoleCards`: A player's two private cards
//! - `Board`: Community cards (0-5 cards)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PokerError;

/// Rank of a card (2-14: 2-A).
pub const RANK_2: u8 = 2;
pub const RANK_3: u8 = 3;
pub const RANK_4: u8 = 4;
pub const RANK_5: u8 = 5;
pub const RANK_6: u8 = 6;
pub const RANK_7: u8 = 7;
pub const RANK_8: u8 = 8;
pub const RANK_9: u8 = 9;
pub const RANK_T: u8 = 10;
pub const RANK_J: u8 = 11;
pub const RANK_Q: u8 = 12;
pub const RANK_K: u8 = 13;
pub const RANK_A: u8 = 14;

/// Number of distinct cards in the universe.
pub const DECK_SIZE: usize = 52;

/// Rank characters for display, indexed by `rank - 2`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Rank names, indexed by `rank - 2`.
const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

/// Plural rank names, indexed by `rank - 2`.
const RANK_PLURALS: [&str; 13] = [
    "Twos", "Threes", "Fours", "Fives", "Sixes", "Sevens", "Eights", "Nines", "Tens", "Jacks",
    "Queens", "Kings", "Aces",
];

/// Name of a rank ("Ace"), or "?" outside 2-14.
pub fn rank_name(rank: u8) -> &'static str {
    RANK_NAMES.get(rank.wrapping_sub(RANK_2) as usize).copied().unwrap_or("?")
}

/// Plural name of a rank ("Aces"), or "?" outside 2-14.
pub fn rank_plural(rank: u8) -> &'static str {
    RANK_PLURALS.get(rank.wrapping_sub(RANK_2) as usize).copied().unwrap_or("?")
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs
    Clubs = 0,
    /// Diamonds
    Diamonds = 1,
    /// Hearts
    Hearts = 2,
    /// Spades
    Spades = 3,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of the suit (0-3).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Short character used in card notation.
    pub fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single playing card.
///
/// Cards order by rank first; the suit only breaks the order between two
/// distinct cards of the same rank. Equality is card identity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Card index 0-51: (rank - 2) * 4 + suit
    id: u8,
}

impl Card {
    /// Create a card from rank (2-14) and suit.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, PokerError> {
        if !(RANK_2..=RANK_A).contains(&rank) {
            return Err(PokerError::InvalidCard(format!("rank {}", rank)));
        }
        Ok(Self {
            id: (rank - RANK_2) * 4 + suit.index(),
        })
    }

    /// Every card of the 52-card universe in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(|id| Card { id })
    }

    /// Parse a whitespace/comma separated or concatenated list of cards,
    /// e.g. `"Ah Kd"`, `"AhKd"`, `"10h,9♠"`.
    pub fn parse_many(s: &str) -> Result<Vec<Card>, PokerError> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        let mut cards = Vec::with_capacity(chars.len() / 2);
        let mut i = 0;
        while i < chars.len() {
            // "10" is the only two-character rank
            let len = if chars[i] == '1' && chars.get(i + 1) == Some(&'0') { 3 } else { 2 };
            if i + len > chars.len() {
                return Err(PokerError::InvalidCard(chars[i..].iter().collect()));
            }
            let token: String = chars[i..i + len].iter().collect();
            cards.push(token.parse()?);
            i += len;
        }
        Ok(cards)
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (2-14: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4 + RANK_2
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        match self.id % 4 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[(self.rank() - RANK_2) as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        self.suit().as_char()
    }
}

impl FromStr for Card {
    type Err = PokerError;

    /// Parse a card from a string like "As", "Kh", "2c", "10d" or "Q♥".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PokerError::InvalidCard(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        let (rank_part, suit) = match chars.split_last() {
            Some((suit, rank_part)) if !rank_part.is_empty() => (rank_part, *suit),
            _ => return Err(invalid()),
        };

        let rank = match rank_part {
            ['1', '0'] => RANK_T,
            [c] => {
                let upper = c.to_ascii_uppercase();
                let index = RANK_CHARS.iter().position(|&r| r == upper).ok_or_else(invalid)?;
                index as u8 + RANK_2
            }
            _ => return Err(invalid()),
        };
        let suit = Suit::from_char(suit).ok_or_else(invalid)?;

        Card::new(rank, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A set of cards packed into a 64-bit mask, one bit per card id.
///
/// Used as the concrete identity of a drawn combination: two draws are the
/// same draw exactly when their masks are equal, whatever order the cards
/// were produced in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CardMask(u64);

impl CardMask {
    /// The empty set.
    pub const EMPTY: CardMask = CardMask(0);

    /// Build a mask from cards. Repeated cards collapse into one bit.
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().fold(Self::EMPTY, |mask, card| mask.with(*card))
    }

    /// Build a mask from cards, rejecting any card given twice.
    pub fn try_from_cards<'a, I>(cards: I) -> Result<Self, PokerError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut mask = Self::EMPTY;
        for &card in cards {
            if mask.contains(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            mask = mask.with(card);
        }
        Ok(mask)
    }

    /// Copy of this mask with `card` added.
    #[inline]
    pub fn with(self, card: Card) -> Self {
        Self(self.0 | (1u64 << card.id()))
    }

    /// Check whether `card` is in the set.
    #[inline]
    pub fn contains(self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Check whether the two sets share a card.
    #[inline]
    pub fn overlaps(self, other: CardMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two sets.
    #[inline]
    pub fn union(self, other: CardMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of cards in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in the set, lowest id first.
    pub fn cards(self) -> Vec<Card> {
        let mut bits = self.0;
        let mut cards = Vec::with_capacity(self.len());
        while bits != 0 {
            let id = bits.trailing_zeros() as u8;
            cards.push(Card { id });
            bits &= bits - 1;
        }
        cards
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cards())
    }
}

/// A player's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Result<Self, PokerError> {
        if card1 == card2 {
            return Err(PokerError::DuplicateCard(card1));
        }
        let (card1, card2) = if card1 >= card2 { (card1, card2) } else { (card2, card1) };
        Ok(Self { card1, card2 })
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl FromStr for HoleCards {
    type Err = PokerError;

    /// Parse hole cards from a string like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Card::parse_many(s)?.as_slice() {
            [c1, c2] => Self::new(*c1, *c2),
            _ => Err(PokerError::InvalidCard(s.to_string())),
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Maximum number of community cards in Hold'em.
pub const MAX_BOARD: usize = 5;

/// Community cards on the board.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty board.
    pub fn empty() -> Self {
        Self { cards: Vec::with_capacity(MAX_BOARD) }
    }

    /// Create a board from cards.
    pub fn new(cards: Vec<Card>) -> Result<Self, PokerError> {
        if cards.len() > MAX_BOARD {
            return Err(PokerError::BoardTooLarge {
                size: cards.len(),
                max: MAX_BOARD,
            });
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(PokerError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    /// Get the number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add a card to the board.
    pub fn push(&mut self, card: Card) -> Result<(), PokerError> {
        if self.cards.len() >= MAX_BOARD {
            return Err(PokerError::BoardTooLarge {
                size: self.cards.len() + 1,
                max: MAX_BOARD,
            });
        }
        if self.contains(card) {
            return Err(PokerError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Check if the board contains a specific card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for Board {
    type Err = PokerError;

    /// Parse a board from a string like "AhKsQd".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Card::parse_many(s)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
