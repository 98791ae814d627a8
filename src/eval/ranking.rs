//! Ordering hands against each other.
//!
//! - `compare_same_type`: tie-break rules within one hand type
//! - `rank_same_type`: groups same-type hands into ranks, ties together
//! - `rank_hands`: ranks every player at a table from hole cards and board

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::best::best_of;
use super::hand::Hand;
use super::hand_type::HandType;
use crate::cards::{Board, Card, CardMask, HoleCards};
use crate::error::PokerError;
use crate::PlayerId;

/// Compare two hands: strength first, then the type's tie-break rules.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.strength()
        .cmp(&b.strength())
        .then_with(|| compare_same_type(a, b))
}

/// Compare two hands of the same type.
///
/// Never looks at suits or at card identity: two hands that match on every
/// key are equal.
pub fn compare_same_type(a: &Hand, b: &Hand) -> Ordering {
    debug_assert_eq!(a.hand_type(), b.hand_type());
    let (x, y) = (a.tiebreak(), b.tiebreak());
    match a.hand_type() {
        // top card of the run, 5 for the wheel
        HandType::StraightFlush | HandType::Straight => x[0].cmp(&y[0]),
        HandType::Flush | HandType::HighCard => x.cmp(y),
        // n-tuple rank, then kickers high to low
        HandType::Quads | HandType::Trips | HandType::Pair => {
            x[0].cmp(&y[0]).then_with(|| x[1..].cmp(&y[1..]))
        }
        HandType::FullHouse => x[0].cmp(&y[0]).then_with(|| x[1].cmp(&y[1])),
        HandType::TwoPair => x[0]
            .cmp(&y[0])
            .then_with(|| x[1].cmp(&y[1]))
            .then_with(|| x[2].cmp(&y[2])),
    }
}

/// Rank hands of a single type.
///
/// Returns groups of indices into `hands`, best group first; hands that
/// tie share a group. Within a group indices keep their input order. The
/// input is left untouched.
///
/// # Errors
/// `MixedHandTypes` when the hands are not all of one type.
pub fn rank_same_type(hands: &[Hand]) -> Result<Vec<Vec<usize>>, PokerError> {
    if let Some(first) = hands.first() {
        if hands.iter().any(|h| h.hand_type() != first.hand_type()) {
            return Err(PokerError::MixedHandTypes);
        }
    }

    let mut order: Vec<usize> = (0..hands.len()).collect();
    order.sort_by(|&i, &j| compare_same_type(&hands[j], &hands[i]));

    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in order {
        match groups.last_mut() {
            Some(group) if compare_same_type(&hands[group[0]], &hands[i]) == Ordering::Equal => {
                group.push(i)
            }
            _ => groups.push(vec![i]),
        }
    }
    Ok(groups)
}

/// One player's place in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRanking {
    /// The player.
    pub player: PlayerId,
    /// The player's best hand.
    pub hand: Hand,
    /// Overall rank, 1 = best.
    pub rank: usize,
    /// Whether another player shares the rank.
    pub tied: bool,
    /// Rank among players holding the same hand type, 1 = best.
    pub sub_rank: usize,
}

/// Players sharing one rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankGroup {
    /// Players at this rank, sorted.
    pub players: Vec<PlayerId>,
    /// Hand of the first player in the group.
    pub hand: Hand,
    /// Description of the hand.
    pub description: String,
}

/// A table's players ordered by hand strength, with ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    groups: BTreeMap<usize, RankGroup>,
    entries: BTreeMap<PlayerId, PlayerRanking>,
}

impl Ranking {
    /// Groups keyed by rank, best (1) first.
    pub fn groups(&self) -> &BTreeMap<usize, RankGroup> {
        &self.groups
    }

    /// The winning group.
    pub fn winners(&self) -> Option<&RankGroup> {
        self.groups.get(&1)
    }

    /// One player's entry.
    pub fn get(&self, player: PlayerId) -> Option<&PlayerRanking> {
        self.entries.get(&player)
    }

    /// Every player's entry, by player id.
    pub fn entries(&self) -> impl Iterator<Item = &PlayerRanking> {
        self.entries.values()
    }
}

/// Check a table's cards for duplicates.
pub(crate) fn table_mask(
    players: &BTreeMap<PlayerId, HoleCards>,
    board: &Board,
) -> Result<CardMask, PokerError> {
    if players.is_empty() {
        return Err(PokerError::NoPlayers);
    }
    let cards: Vec<Card> = players
        .values()
        .flat_map(|hole| hole.cards())
        .chain(board.cards().iter().copied())
        .collect();
    CardMask::try_from_cards(&cards)
}

/// Rank every player's best hand on the given board.
///
/// Ranks are dense: tied players share a rank and the next group takes the
/// next number.
///
/// # Errors
/// `NoPlayers` for an empty table, `DuplicateCard` when any card is shared.
pub fn rank_hands(
    players: &BTreeMap<PlayerId, HoleCards>,
    board: &Board,
) -> Result<Ranking, PokerError> {
    table_mask(players, board)?;

    let mut by_type: BTreeMap<HandType, Vec<(PlayerId, Hand)>> = BTreeMap::new();
    for (&player, hole) in players {
        let cards: Vec<Card> = hole.cards().iter().chain(board.cards()).copied().collect();
        let hand = best_of(&cards).hand().clone();
        by_type.entry(hand.hand_type()).or_default().push((player, hand));
    }

    let mut groups = BTreeMap::new();
    let mut entries = BTreeMap::new();
    let mut rank = 0;
    // BTreeMap iterates weakest type first
    for seated in by_type.values().rev() {
        let hands: Vec<Hand> = seated.iter().map(|(_, hand)| hand.clone()).collect();
        for (sub_rank, group) in rank_same_type(&hands)?.into_iter().enumerate() {
            rank += 1;
            let tied = group.len() > 1;
            let mut members: Vec<PlayerId> = group.iter().map(|&i| seated[i].0).collect();
            members.sort_unstable();

            for &i in &group {
                let (player, hand) = &seated[i];
                entries.insert(
                    *player,
                    PlayerRanking {
                        player: *player,
                        hand: hand.clone(),
                        rank,
                        tied,
                        sub_rank: sub_rank + 1,
                    },
                );
            }

            let hand = seated[group[0]].1.clone();
            groups.insert(
                rank,
                RankGroup {
                    players: members,
                    description: hand.describe(),
                    hand,
                },
            );
        }
    }

    Ok(Ranking { groups, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::classify::{classify, nine_card_samples, HAND_SIZE};
    use crate::eval::combinations::combinations;

    fn hand(s: &str) -> Hand {
        classify(&Card::parse_many(s).unwrap()).unwrap()
    }

    fn table(holes: &[(PlayerId, &str)]) -> BTreeMap<PlayerId, HoleCards> {
        holes
            .iter()
            .map(|&(id, cards)| (id, cards.parse().unwrap()))
            .collect()
    }

    #[test]
    fn test_wheel_below_six_high() {
        let wheel = hand("Ah 2c 3d 4s 5h");
        let six = hand("2h 3c 4d 5s 6h");
        assert_eq!(compare_hands(&wheel, &six), Ordering::Less);
        assert_eq!(compare_hands(&wheel, &hand("As Kd Qh Jc 9s")), Ordering::Greater);
    }

    #[test]
    fn test_kickers_break_ties() {
        let a = hand("Kh Kd 9c 5s 3h");
        let b = hand("Ks Kc 9d 5h 2h");
        assert_eq!(compare_same_type(&a, &b), Ordering::Greater);

        let low_pairs = hand("Qh Qd 3c 3s Ah");
        let high_pairs = hand("Qs Qc 4d 4h 2h");
        assert_eq!(compare_same_type(&low_pairs, &high_pairs), Ordering::Less);
    }

    #[test]
    fn test_suits_never_break_ties() {
        let a = hand("Ah Kh 9c 5s 3h");
        let b = hand("As Ks 9d 5h 3c");
        assert_eq!(compare_hands(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_rank_same_type_groups_ties() {
        let hands = vec![
            hand("9h 9d 9c Ks 2h"),
            hand("Jh Jd Jc 3s 2d"),
            hand("9s 9c 9h Kd 2c"),
            hand("9s 9c 9h Qd 2c"),
        ];
        let groups = rank_same_type(&hands).unwrap();
        assert_eq!(groups, vec![vec![1], vec![0, 2], vec![3]]);
        // input untouched
        assert_eq!(hands[0].tiebreak()[0], Some(9));
    }

    #[test]
    fn test_rank_same_type_rejects_mixed() {
        let hands = vec![hand("9h 9d 9c Ks 2h"), hand("Kh Kd 4c 4s 9h")];
        assert_eq!(rank_same_type(&hands), Err(PokerError::MixedHandTypes));
        assert_eq!(rank_same_type(&[]).unwrap(), Vec::<Vec<usize>>::new());
    }

    #[test]
    fn test_ordering_is_total_preorder() {
        let mut by_type: BTreeMap<HandType, Vec<Hand>> = BTreeMap::new();
        for sample in nine_card_samples() {
            for subset in combinations(&sample, HAND_SIZE) {
                let hand = classify(&subset).unwrap();
                by_type.entry(hand.hand_type()).or_default().push(hand);
            }
        }
        assert_eq!(by_type.len(), HandType::ALL.len());

        // an order induced by a key is a total preorder
        let key = |h: &Hand| (h.strength(), h.tiebreak().to_vec());
        let all: Vec<&Hand> = by_type.values().flatten().collect();
        for &a in &all {
            for &b in &all {
                assert_eq!(compare_hands(a, b), key(a).cmp(&key(b)), "{} vs {}", a, b);
                assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            }
        }

        for hands in by_type.values() {
            let groups = rank_same_type(hands).unwrap();
            assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), hands.len());
            for group in &groups {
                for &i in group {
                    assert_eq!(compare_same_type(&hands[i], &hands[group[0]]), Ordering::Equal);
                }
            }
            for pair in groups.windows(2) {
                assert_eq!(
                    compare_same_type(&hands[pair[0][0]], &hands[pair[1][0]]),
                    Ordering::Greater
                );
            }
        }
    }

    #[test]
    fn test_pocket_kings_tie_at_rank_one() {
        let players = table(&[(1, "KhKd"), (2, "KsKc"), (3, "7c2d")]);
        let board: Board = "As 9h 5d 3c Jh".parse().unwrap();
        let ranking = rank_hands(&players, &board).unwrap();

        let winners = ranking.winners().unwrap();
        assert_eq!(winners.players, vec![1, 2]);
        assert_eq!(winners.description, "Pair (Kings)");
        assert!(ranking.get(1).unwrap().tied);
        assert_eq!(ranking.get(2).unwrap().rank, 1);

        let loser = ranking.get(3).unwrap();
        assert_eq!(loser.rank, 2);
        assert!(!loser.tied);
        assert_eq!(loser.hand.hand_type(), HandType::HighCard);
    }

    #[test]
    fn test_rank_hands_orders_types_then_kickers() {
        let players = table(&[(10, "AhKd"), (20, "9c9d"), (30, "AsQc"), (40, "8h7h")]);
        let board: Board = "Ac 9h 6s 2d Td".parse().unwrap();
        let ranking = rank_hands(&players, &board).unwrap();

        let order: Vec<Vec<PlayerId>> =
            ranking.groups().values().map(|g| g.players.clone()).collect();
        assert_eq!(order, vec![vec![40], vec![20], vec![10], vec![30]]);
        assert_eq!(ranking.get(10).unwrap().sub_rank, 1);
        assert_eq!(ranking.get(30).unwrap().sub_rank, 2);
        assert_eq!(ranking.get(40).unwrap().hand.hand_type(), HandType::Straight);
    }

    #[test]
    fn test_rank_hands_validates() {
        let board: Board = "Ac 9h 6s".parse().unwrap();
        assert_eq!(rank_hands(&BTreeMap::new(), &board), Err(PokerError::NoPlayers));
        let players = table(&[(1, "AcKd")]);
        assert!(matches!(
            rank_hands(&players, &board),
            Err(PokerError::DuplicateCard(_))
        ));
    }
}
