//! Settling a draw several players complete with the same hand type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::{Card, CardMask, HoleCards};
use crate::eval::best::best_of;
use crate::eval::ranking::compare_same_type;
use crate::eval::{Hand, HandType};
use crate::PlayerId;

/// Who takes a contested draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// One player holds the best hand.
    Winner(PlayerId),
    /// Several players hold equal hands, sorted by id.
    Tie(Vec<PlayerId>),
}

/// Decide a draw between contenders who all reach `hand_type` with it.
///
/// Each contender's best hand is rebuilt from hole cards, board and the
/// drawn cards, then compared within the type. `contenders` must not be
/// empty.
pub fn resolve_draw(
    hand_type: HandType,
    contenders: &[(PlayerId, HoleCards)],
    board: &[Card],
    draw: CardMask,
) -> DrawOutcome {
    let drawn = draw.cards();
    let mut best: Vec<(PlayerId, Hand)> = Vec::with_capacity(contenders.len());

    for &(player, hole) in contenders {
        let cards: Vec<Card> = hole
            .cards()
            .iter()
            .chain(board)
            .chain(&drawn)
            .copied()
            .collect();
        let hand = best_of(&cards).hand().clone();
        debug_assert_eq!(hand.hand_type(), hand_type, "player {} contests {}", player, hand_type);

        match best.first().map(|(_, top)| compare_same_type(&hand, top)) {
            None | Some(Ordering::Equal) => best.push((player, hand)),
            Some(Ordering::Greater) => best = vec![(player, hand)],
            Some(Ordering::Less) => {}
        }
    }

    let mut winners: Vec<PlayerId> = best.into_iter().map(|(player, _)| player).collect();
    winners.sort_unstable();
    if winners.len() == 1 {
        DrawOutcome::Winner(winners[0])
    } else {
        DrawOutcome::Tie(winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> CardMask {
        CardMask::from_cards(&Card::parse_many(s).unwrap())
    }

    #[test]
    fn test_higher_kicker_takes_the_draw() {
        let contenders: [(PlayerId, HoleCards); 2] = [
            (1, "AhQc".parse().unwrap()),
            (2, "AdJc".parse().unwrap()),
        ];
        let board = Card::parse_many("As 8d 5c").unwrap();
        let outcome = resolve_draw(HandType::Pair, &contenders, &board, mask("3h 2s"));
        assert_eq!(outcome, DrawOutcome::Winner(1));
    }

    #[test]
    fn test_board_plays_for_a_tie() {
        let contenders: [(PlayerId, HoleCards); 2] = [
            (7, "2c3d".parse().unwrap()),
            (4, "2d3c".parse().unwrap()),
        ];
        let board = Card::parse_many("Ah Kh Qs").unwrap();
        let outcome = resolve_draw(HandType::Straight, &contenders, &board, mask("Jd Tc"));
        assert_eq!(outcome, DrawOutcome::Tie(vec![4, 7]));
    }

    #[test]
    fn test_draw_decides_between_flushes() {
        let contenders: [(PlayerId, HoleCards); 2] = [
            (1, "Ah2h".parse().unwrap()),
            (2, "Kh Qh".parse().unwrap()),
        ];
        let board = Card::parse_many("9h 6h 3c").unwrap();
        let outcome = resolve_draw(HandType::Flush, &contenders, &board, mask("4h 8d"));
        assert_eq!(outcome, DrawOutcome::Winner(1));
    }
}
