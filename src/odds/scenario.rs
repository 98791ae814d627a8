//! Draw scenarios: compact wildcard notation for families of draws.
//!
//! A scenario has one slot per card still to come. Each slot pins the
//! suit, the rank, both or neither, written as two characters with `*`
//! for a wildcard: `K*` is any king, `*h` any heart, `Kh` the king of
//! hearts and `**` any card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Suit};
use crate::error::PokerError;
use crate::eval::HandType;

/// Suit half of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuitPattern {
    /// Any suit.
    Any,
    /// Exactly this suit.
    Exactly(Suit),
}

/// Rank half of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankPattern {
    /// Any rank.
    Any,
    /// Exactly this rank (2-14).
    Exactly(u8),
}

/// One card to come, possibly wildcarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    /// Required rank.
    pub rank: RankPattern,
    /// Required suit.
    pub suit: SuitPattern,
}

impl Slot {
    /// Matches every card.
    pub const ANY: Slot = Slot {
        rank: RankPattern::Any,
        suit: SuitPattern::Any,
    };

    /// Any card of the given rank.
    pub fn rank(rank: u8) -> Self {
        Slot {
            rank: RankPattern::Exactly(rank),
            suit: SuitPattern::Any,
        }
    }

    /// Any card of the given suit.
    pub fn suit(suit: Suit) -> Self {
        Slot {
            rank: RankPattern::Any,
            suit: SuitPattern::Exactly(suit),
        }
    }

    /// Exactly this card.
    pub fn card(card: Card) -> Self {
        Slot {
            rank: RankPattern::Exactly(card.rank()),
            suit: SuitPattern::Exactly(card.suit()),
        }
    }

    /// Whether the slot is a full wildcard.
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    /// Whether `card` fits the slot.
    pub fn matches(&self, card: Card) -> bool {
        let rank_ok = match self.rank {
            RankPattern::Any => true,
            RankPattern::Exactly(r) => card.rank() == r,
        };
        let suit_ok = match self.suit {
            SuitPattern::Any => true,
            SuitPattern::Exactly(s) => card.suit() == s,
        };
        rank_ok && suit_ok
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            RankPattern::Any => write!(f, "*")?,
            // any card of that rank renders the rank character
            RankPattern::Exactly(r) => match Card::new(r, Suit::Clubs) {
                Ok(card) => write!(f, "{}", card.rank_char())?,
                Err(_) => write!(f, "?")?,
            },
        }
        match self.suit {
            SuitPattern::Any => write!(f, "*"),
            SuitPattern::Exactly(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Slot {
    type Err = PokerError;

    /// Parse `"K*"`, `"*h"`, `"Kh"` or `"**"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PokerError::InvalidCard(s.to_string());
        let mut chars = s.trim().chars();
        let (r, su) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(invalid()),
        };

        // reuse card parsing for each concrete half
        let rank = match r {
            '*' => RankPattern::Any,
            r => RankPattern::Exactly(format!("{}c", r).parse::<Card>()?.rank()),
        };
        let suit = match su {
            '*' => SuitPattern::Any,
            su => SuitPattern::Exactly(format!("2{}", su).parse::<Card>()?.suit()),
        };
        Ok(Slot { rank, suit })
    }
}

/// A family of draws that completes one target hand of one type.
///
/// Only the load-bearing slots are concrete; the rest are `Any`. The key
/// orders scenarios of the same type, higher keys first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawScenario {
    hand_type: HandType,
    slots: Vec<Slot>,
    key: Vec<u8>,
}

impl DrawScenario {
    /// Build a scenario, padding `needed` with wildcards up to `to_come`.
    pub fn new(hand_type: HandType, mut needed: Vec<Slot>, to_come: usize, key: Vec<u8>) -> Self {
        debug_assert!(needed.len() <= to_come);
        needed.resize(to_come, Slot::ANY);
        Self {
            hand_type,
            slots: needed,
            key,
        }
    }

    /// A scenario matching every draw.
    pub fn any(hand_type: HandType, to_come: usize) -> Self {
        Self::new(hand_type, Vec::new(), to_come, Vec::new())
    }

    /// The hand type this scenario completes.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// One slot per card to come.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Ordering key within the hand type.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Number of slots that constrain the draw.
    pub fn needed(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_any()).count()
    }
}

impl fmt::Display for DrawScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.hand_type)?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, "]")
    }
}

/// Slots serialize as their two-character notation.
impl Serialize for Slot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
