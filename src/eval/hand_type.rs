//! Hand type and game type tags.
//!
//! Both tags are closed enums; every operation that depends on them is an
//! exhaustive `match`, so adding a variant is a compile error until every
//! operation handles it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Board, MAX_BOARD};
use crate::error::PokerError;

/// Hand type categories, ordered from worst to best.
///
/// The discriminant is the hand's strength (1-9, 9 = best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// No better combination.
    HighCard = 1,
    /// Two cards of one rank.
    Pair = 2,
    /// Two pairs.
    TwoPair = 3,
    /// Three cards of one rank.
    Trips = 4,
    /// Five consecutive ranks.
    Straight = 5,
    /// Five cards of one suit.
    Flush = 6,
    /// Three of one rank and two of another.
    FullHouse = 7,
    /// Four cards of one rank.
    Quads = 8,
    /// A straight in one suit.
    StraightFlush = 9,
}

impl HandType {
    /// All hand types, strongest first.
    pub const ALL: [HandType; 9] = [
        HandType::StraightFlush,
        HandType::Quads,
        HandType::FullHouse,
        HandType::Flush,
        HandType::Straight,
        HandType::Trips,
        HandType::TwoPair,
        HandType::Pair,
        HandType::HighCard,
    ];

    /// Numeric strength (1-9, 9 = best).
    #[inline]
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// Get the type name.
    pub fn name(self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two Pair",
            HandType::Trips => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::Quads => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
        }
    }

    /// Length of the tiebreak vector for this type, whatever the hand size.
    pub fn tiebreak_len(self) -> usize {
        match self {
            HandType::StraightFlush | HandType::Straight => 1,
            HandType::Quads | HandType::FullHouse => 2,
            HandType::Trips | HandType::TwoPair => 3,
            HandType::Pair => 4,
            HandType::Flush | HandType::HighCard => 5,
        }
    }

    /// Whether the type needs a full five-card hand.
    pub fn needs_full_hand(self) -> bool {
        match self {
            HandType::StraightFlush | HandType::FullHouse | HandType::Flush | HandType::Straight => {
                true
            }
            HandType::Quads | HandType::Trips | HandType::TwoPair | HandType::Pair | HandType::HighCard => {
                false
            }
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HandType {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "straightflush" => Ok(HandType::StraightFlush),
            "quads" | "fourofakind" => Ok(HandType::Quads),
            "fullhouse" => Ok(HandType::FullHouse),
            "flush" => Ok(HandType::Flush),
            "straight" => Ok(HandType::Straight),
            "trips" | "threeofakind" => Ok(HandType::Trips),
            "twopair" => Ok(HandType::TwoPair),
            "pair" | "onepair" => Ok(HandType::Pair),
            "highcard" => Ok(HandType::HighCard),
            _ => Err(PokerError::InvalidHandType(s.to_string())),
        }
    }
}

/// The game variant the engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    /// Texas Hold'em: two hole cards, five board cards, best five of seven.
    #[default]
    TexasHoldem,
}

impl GameType {
    /// Community cards on a complete board.
    pub fn board_cards(self) -> usize {
        match self {
            GameType::TexasHoldem => MAX_BOARD,
        }
    }

    /// Board cards still to be dealt, zero once the board is complete.
    pub fn cards_to_come(self, board: &Board) -> usize {
        self.board_cards().saturating_sub(board.len())
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::TexasHoldem => write!(f, "texas-holdem"),
        }
    }
}

impl FromStr for GameType {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "texas-holdem" | "texas_holdem" | "holdem" | "nlhe" => Ok(GameType::TexasHoldem),
            _ => Err(PokerError::InvalidGameType(s.to_string())),
        }
    }
}
