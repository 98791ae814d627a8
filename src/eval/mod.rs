//! Hand evaluation.
//!
//! # Overview
//!
//! Evaluation runs bottom-up:
//! 1. `combinations` enumerates every subset of five (or fewer) cards
//! 2. `classify` gives each subset its strongest hand type and tiebreak vector
//! 3. `best` keeps the strongest subset of a player's cards
//! 4. `ranking` orders hands within a type and players at a table
//!
//! # Example
//!
//! ```
//! use holdem_odds::cards::Card;
//! use holdem_odds::eval::{find_best_hand, HandType};
//!
//! let hole = Card::parse_many("7h 8h").unwrap();
//! let board = Card::parse_many("6h 9h Th").unwrap();
//! let best = find_best_hand(&hole, &board).unwrap();
//! assert_eq!(best.hand_type(), HandType::StraightFlush);
//! assert_eq!(best.describe(), "Straight Flush (Ten high)");
//! ```

pub mod best;
pub mod classify;
pub mod combinations;
pub mod hand;
pub mod hand_type;
pub mod ranking;

pub use best::{find_best_hand, BestHand};
pub use classify::classify;
pub use combinations::{binomial, combinations, Combinations};
pub use hand::{describe_hand, Hand, Tiebreak};
pub use hand_type::{GameType, HandType};
pub use ranking::{
    compare_hands, compare_same_type, rank_hands, rank_same_type, PlayerRanking, RankGroup,
    Ranking,
};
