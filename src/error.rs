//! Error types for the evaluation and odds engine.

use thiserror::Error;

use crate::cards::Card;

/// Errors raised when validating inputs to the engine.
///
/// Every variant is a validation failure reported before any computation
/// starts; nothing in the engine retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokerError {
    /// A rank, suit or card string outside the defined domain.
    #[error("invalid card `{0}`")]
    InvalidCard(String),

    /// An unrecognized hand type tag.
    #[error("unknown hand type `{0}`")]
    InvalidHandType(String),

    /// An unrecognized game type tag.
    #[error("unknown game type `{0}`")]
    InvalidGameType(String),

    /// Not enough cards to form any hand.
    #[error("insufficient cards: need at least {needed}, got {available}")]
    InsufficientCards {
        /// Minimum number of cards required.
        needed: usize,
        /// Number of cards supplied.
        available: usize,
    },

    /// More cards than a single hand holds.
    #[error("too many cards: at most {max}, got {available}")]
    TooManyCards {
        /// Maximum number of cards allowed.
        max: usize,
        /// Number of cards supplied.
        available: usize,
    },

    /// A hand whose type or tiebreak does not match its cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),

    /// The same physical card was supplied twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    /// More board cards than the game deals.
    #[error("board has {size} cards, at most {max} allowed")]
    BoardTooLarge {
        /// Number of board cards supplied.
        size: usize,
        /// Maximum board size for the game.
        max: usize,
    },

    /// A ranking or odds call without any player.
    #[error("at least one player is required")]
    NoPlayers,

    /// Hands of different types passed to the intra-type ranker.
    #[error("hands of different types cannot be ranked together")]
    MixedHandTypes,

    /// Invalid odds configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when validating or loading an odds configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Thread count of zero.
    #[error("thread count must be at least 1")]
    InvalidThreads,

    /// The dedicated thread pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// The configuration could not be parsed.
    #[error("invalid configuration json: {0}")]
    Json(String),
}
