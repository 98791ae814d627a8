//! # Hold'em Odds
//!
//! Texas Hold'em hand evaluation and exact winning odds.
//!
//! ## Features
//!
//! - **Best Hand**: The strongest five cards from hole cards and board, with
//!   every tied subset
//! - **Ranking**: Full tie-break resolution across any number of players
//! - **Exact Odds**: Every remaining board completion enumerated through
//!   wildcard draw scenarios, each completion credited once
//! - **Parallel**: Outs enumeration and draw resolution on rayon
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeMap;
//! use holdem_odds::{find_odds, rank_hands, Board, HoleCards};
//!
//! let mut players = BTreeMap::new();
//! players.insert(1, "KhKd".parse::<HoleCards>().unwrap());
//! players.insert(2, "KsKc".parse::<HoleCards>().unwrap());
//!
//! let board: Board = "As 9h 5d 3c Jh".parse().unwrap();
//! let ranking = rank_hands(&players, &board).unwrap();
//! assert_eq!(ranking.winners().unwrap().players, vec![1, 2]);
//!
//! let flop: Board = "As 9h 5d".parse().unwrap();
//! let odds = find_odds(&players, &flop).unwrap();
//! let total: f64 = odds.probabilities().values().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, hole cards, board and deck
//! - [`eval`]: Classification, best hand and ranking
//! - [`odds`]: Outs, claims and the odds aggregator
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//!                  ┌──────────────────────┐
//!                  │   cards (Card, Deck) │
//!                  └──────────┬───────────┘
//!                             │
//!                  ┌──────────▼───────────┐
//!                  │ combinations/classify│
//!                  └──────────┬───────────┘
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!     ┌─────────────────┐          ┌───────────────────┐
//!     │    best hand    │          │   outs enumerator │
//!     └────────┬────────┘          └─────────┬─────────┘
//!              ▼                             ▼
//!     ┌─────────────────┐          ┌───────────────────┐
//!     │     ranking     │◄─────────│ claims/tiebreaker │
//!     └─────────────────┘          └─────────┬─────────┘
//!                                            ▼
//!                                  ┌───────────────────┐
//!                                  │  odds aggregator  │
//!                                  └───────────────────┘
//! ```

#![warn(missing_docs)]

/// Card layer: cards, masks, hole cards, board and deck.
pub mod cards;

/// Error types.
pub mod error;

/// Hand classification, best-hand selection and ranking.
pub mod eval;

/// Outs enumeration and exact odds.
pub mod odds;

/// Identifier of a player at the table.
pub type PlayerId = u32;

// Re-export commonly used types at crate root for convenience
pub use cards::{Board, Card, CardMask, Deck, HoleCards, Suit};
pub use error::{ConfigError, PokerError};
pub use eval::{
    describe_hand, find_best_hand, rank_hands, BestHand, GameType, Hand, HandType, Ranking,
};
pub use odds::{find_odds, find_odds_with, Odds, OddsConfig, PlayerOdds};
