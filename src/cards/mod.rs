//! Card layer.
//!
//! - `card`: Card, suit, hole cards, board and card masks
//! - `deck`: The 52-card universe and dealing

pub mod card;
pub mod deck;

pub use card::{
    rank_name, rank_plural, Board, Card, CardMask, HoleCards, Suit, DECK_SIZE, MAX_BOARD,
    RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8, RANK_9, RANK_A, RANK_J, RANK_K,
    RANK_Q, RANK_T,
};
pub use deck::Deck;
