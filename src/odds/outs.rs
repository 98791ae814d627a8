//! Outs enumeration.
//!
//! For one player and one hand type, list the draw scenarios that leave
//! the player holding a hand of that type once the board is complete.
//! A draw belongs to some scenario exactly when the known cards plus the
//! drawn cards contain a pattern of the type.
//!
//! Targets are visited best first. A target the known cards already
//! complete yields a single all-wildcard scenario and ends the type: every
//! draw keeps the pattern, so nothing further can add draws.

use log::trace;

use super::scenario::{DrawScenario, Slot};
use crate::cards::{Card, Suit, RANK_2, RANK_5, RANK_A};
use crate::eval::classify::HAND_SIZE;
use crate::eval::HandType;

/// Rank and suit counts for the known cards and the undealt pool.
struct Counts {
    known_ranks: [u8; 15],
    known_suits: [u8; 4],
    pool_ranks: [u8; 15],
    pool_suits: [u8; 4],
}

impl Counts {
    fn new(known: &[Card], pool: &[Card]) -> Self {
        let mut counts = Counts {
            known_ranks: [0; 15],
            known_suits: [0; 4],
            pool_ranks: [0; 15],
            pool_suits: [0; 4],
        };
        for card in known {
            counts.known_ranks[card.rank() as usize] += 1;
            counts.known_suits[card.suit().index() as usize] += 1;
        }
        for card in pool {
            counts.pool_ranks[card.rank() as usize] += 1;
            counts.pool_suits[card.suit().index() as usize] += 1;
        }
        counts
    }

    /// Cards of `rank` still needed to hold `count` of them, if the pool
    /// can supply them.
    fn rank_need(&self, rank: u8, count: u8) -> Option<usize> {
        let need = count.saturating_sub(self.known_ranks[rank as usize]);
        (self.pool_ranks[rank as usize] >= need).then_some(need as usize)
    }

    fn suit_need(&self, suit: Suit) -> Option<usize> {
        let need = (HAND_SIZE as u8).saturating_sub(self.known_suits[suit.index() as usize]);
        (self.pool_suits[suit.index() as usize] >= need).then_some(need as usize)
    }
}

/// Collects scenarios for one hand type.
struct Collector {
    hand_type: HandType,
    to_come: usize,
    scenarios: Vec<DrawScenario>,
}

impl Collector {
    /// Record a target; returns true once the type is already made.
    fn target(&mut self, needed: Vec<Slot>, key: Vec<u8>) -> bool {
        let made = needed.is_empty();
        if needed.len() <= self.to_come {
            self.scenarios
                .push(DrawScenario::new(self.hand_type, needed, self.to_come, key));
        }
        made
    }
}

/// Ranks from ace down to deuce.
fn ranks_desc() -> impl Iterator<Item = u8> {
    (RANK_2..=RANK_A).rev()
}

/// Ranks of the five-card run topped by `top`; the wheel uses the ace low.
fn run(top: u8) -> [u8; 5] {
    if top == RANK_5 {
        [5, 4, 3, 2, RANK_A]
    } else {
        [top, top - 1, top - 2, top - 3, top - 4]
    }
}

/// Enumerate the scenarios completing `hand_type` for a player.
///
/// `known` holds the player's hole cards and the board, `pool` every card
/// not yet seen, and `to_come` the number of board cards still to deal.
/// Scenarios come out best target first, ordered by their key.
pub fn enumerate_outs(
    hand_type: HandType,
    known: &[Card],
    pool: &[Card],
    to_come: usize,
) -> Vec<DrawScenario> {
    let counts = Counts::new(known, pool);
    let mut out = Collector {
        hand_type,
        to_come,
        scenarios: Vec::new(),
    };

    match hand_type {
        HandType::StraightFlush => straight_flush(&mut out, known, pool),
        HandType::Quads => n_of_a_kind(&mut out, &counts, 4),
        HandType::FullHouse => full_house(&mut out, &counts),
        HandType::Flush => flush(&mut out, &counts),
        HandType::Straight => straight(&mut out, &counts),
        HandType::Trips => n_of_a_kind(&mut out, &counts, 3),
        HandType::TwoPair => two_pair(&mut out, &counts),
        HandType::Pair => n_of_a_kind(&mut out, &counts, 2),
        HandType::HighCard => out.scenarios.push(DrawScenario::any(hand_type, to_come)),
    }

    out.scenarios.sort_by(|a, b| b.key().cmp(a.key()));
    trace!("{}: {} scenarios", hand_type, out.scenarios.len());
    out.scenarios
}

fn straight_flush(out: &mut Collector, known: &[Card], pool: &[Card]) {
    for top in (RANK_5..=RANK_A).rev() {
        for suit in Suit::ALL {
            let cards: Option<Vec<Card>> = run(top)
                .iter()
                .map(|&rank| Card::new(rank, suit).ok())
                .collect();
            let Some(cards) = cards else { continue };

            let missing: Vec<Card> = cards.into_iter().filter(|c| !known.contains(c)).collect();
            if missing.iter().any(|c| !pool.contains(c)) {
                continue;
            }
            let needed = missing.into_iter().map(Slot::card).collect();
            if out.target(needed, vec![top, suit.index()]) {
                return;
            }
        }
    }
}

fn n_of_a_kind(out: &mut Collector, counts: &Counts, count: u8) {
    for rank in ranks_desc() {
        let Some(need) = counts.rank_need(rank, count) else { continue };
        if out.target(vec![Slot::rank(rank); need], vec![rank]) {
            return;
        }
    }
}

fn full_house(out: &mut Collector, counts: &Counts) {
    for trips in ranks_desc() {
        let Some(trips_need) = counts.rank_need(trips, 3) else { continue };
        for pair in ranks_desc().filter(|&r| r != trips) {
            let Some(pair_need) = counts.rank_need(pair, 2) else { continue };
            let mut needed = vec![Slot::rank(trips); trips_need];
            needed.extend(vec![Slot::rank(pair); pair_need]);
            if out.target(needed, vec![trips, pair]) {
                return;
            }
        }
    }
}

fn flush(out: &mut Collector, counts: &Counts) {
    let mut suits: Vec<(usize, Suit)> = Suit::ALL
        .into_iter()
        .filter_map(|suit| counts.suit_need(suit).map(|need| (need, suit)))
        .collect();
    suits.sort_by_key(|&(need, _)| need);

    for (need, suit) in suits {
        let have = HAND_SIZE - need;
        if out.target(vec![Slot::suit(suit); need], vec![have as u8, suit.index()]) {
            return;
        }
    }
}

fn straight(out: &mut Collector, counts: &Counts) {
    for top in (RANK_5..=RANK_A).rev() {
        let missing: Vec<u8> = run(top)
            .into_iter()
            .filter(|&r| counts.known_ranks[r as usize] == 0)
            .collect();
        if missing.iter().any(|&r| counts.pool_ranks[r as usize] == 0) {
            continue;
        }
        let needed = missing.into_iter().map(Slot::rank).collect();
        if out.target(needed, vec![top]) {
            return;
        }
    }
}

fn two_pair(out: &mut Collector, counts: &Counts) {
    for high in ranks_desc() {
        let Some(high_need) = counts.rank_need(high, 2) else { continue };
        for low in ranks_desc().filter(|&r| r < high) {
            let Some(low_need) = counts.rank_need(low, 2) else { continue };
            let mut needed = vec![Slot::rank(high); high_need];
            needed.extend(vec![Slot::rank(low); low_need]);
            if out.target(needed, vec![high, low]) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardMask;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    /// Every card not in `dead`.
    fn pool_without(dead: &[Card]) -> Vec<Card> {
        let dead = CardMask::from_cards(dead);
        Card::all().filter(|c| !dead.contains(*c)).collect()
    }

    fn strings(scenarios: &[DrawScenario]) -> Vec<String> {
        scenarios.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flush_draw_needs_one_heart() {
        let known = cards("Ah Kh 7h 2h 9c");
        let outs = enumerate_outs(HandType::Flush, &known, &pool_without(&known), 2);
        assert_eq!(strings(&outs), vec!["Flush [*h **]"]);
    }

    #[test]
    fn test_open_ender_lists_runs_best_first() {
        let known = cards("9c 8d 7h 6s 2c");
        let outs = enumerate_outs(HandType::Straight, &known, &pool_without(&known), 2);
        assert_eq!(
            strings(&outs),
            vec![
                "Straight [J* T*]",
                "Straight [T* **]",
                "Straight [5* **]",
                "Straight [5* 4*]",
            ]
        );
    }

    #[test]
    fn test_made_hand_stops_with_wildcards() {
        let known = cards("Kh Kd 7c 8s 2d");
        let outs = enumerate_outs(HandType::Pair, &known, &pool_without(&known), 2);
        assert_eq!(strings(&outs), vec!["Pair [A* A*]", "Pair [** **]"]);

        let outs = enumerate_outs(HandType::HighCard, &known, &pool_without(&known), 2);
        assert_eq!(strings(&outs), vec!["High Card [** **]"]);
    }

    #[test]
    fn test_river_has_no_slots() {
        let known = cards("Kh Kd 7c 8s 2d Qc 3h");
        let pool = pool_without(&known);
        let pair = enumerate_outs(HandType::Pair, &known, &pool, 0);
        assert_eq!(strings(&pair), vec!["Pair []"]);
        assert!(enumerate_outs(HandType::Trips, &known, &pool, 0).is_empty());
    }

    #[test]
    fn test_target_skipped_when_pool_is_short() {
        let known = cards("Kh Kd 7c 8s 2d");
        // the other two kings sit in an opponent's hand
        let pool = pool_without(&cards("Kh Kd 7c 8s 2d Kc Ks"));
        assert!(enumerate_outs(HandType::Quads, &known, &pool, 2).is_empty());

        let outs = enumerate_outs(HandType::Quads, &known, &pool_without(&known), 2);
        assert_eq!(strings(&outs), vec!["Four of a Kind [K* K*]"]);
    }

    #[test]
    fn test_three_pairs_fill_up_on_any_pair_rank() {
        let known = cards("Kh Kd 9c 9s 4h 4d");
        let outs = enumerate_outs(HandType::FullHouse, &known, &pool_without(&known), 1);
        let slots: Vec<String> = outs.iter().map(|s| s.slots()[0].to_string()).collect();
        for rank in ["K*", "9*", "4*"] {
            assert!(slots.iter().any(|s| s == rank), "{}", rank);
        }
        assert!(outs.iter().all(|s| s.needed() == 1));
    }

    #[test]
    fn test_scenarios_ordered_by_key() {
        let known = cards("Ah Kh Qh 9c 9d");
        let pool = pool_without(&known);
        for hand_type in HandType::ALL {
            let outs = enumerate_outs(hand_type, &known, &pool, 2);
            assert!(!outs.is_empty(), "{}", hand_type);
            for pair in outs.windows(2) {
                assert!(pair[0].key() >= pair[1].key(), "{} {} {}", hand_type, pair[0], pair[1]);
            }
        }

        // a made pair keeps its rank as key, below the better targets
        let outs = enumerate_outs(HandType::Pair, &known, &pool, 2);
        assert_eq!(outs.last().map(|s| s.key()), Some(&[9u8][..]));
        assert_eq!(outs.last().map(|s| s.needed()), Some(0));
    }

    #[test]
    fn test_straight_flush_uses_concrete_cards() {
        let known = cards("7h 8h 6h 9h 2c");
        let outs = enumerate_outs(HandType::StraightFlush, &known, &pool_without(&known), 2);
        let first: Vec<String> = strings(&outs[..3]);
        assert_eq!(
            first,
            vec![
                "Straight Flush [Jh Th]",
                "Straight Flush [Th **]",
                "Straight Flush [5h **]",
            ]
        );
    }
}
