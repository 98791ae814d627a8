//! Exact winning odds over every completion of the board.
//!
//! Hand types are walked strongest first. At each type every player's
//! still-unsettled draws reaching that type are collected; a draw only one
//! player reaches goes to that player, a draw several reach is settled by
//! the tiebreaker. Every draw seen at a type is then settled, so each
//! completion is credited exactly once, at the best type anyone makes.

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::claims::ClaimedOuts;
use super::config::OddsConfig;
use super::outs::enumerate_outs;
use super::scenario::DrawScenario;
use super::tiebreak::{resolve_draw, DrawOutcome};
use crate::cards::{Board, Card, CardMask, Deck, HoleCards};
use crate::error::PokerError;
use crate::eval::combinations::binomial;
use crate::eval::ranking::table_mask;
use crate::eval::HandType;
use crate::PlayerId;

/// One player's share of the draws.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerOdds {
    /// Draws won outright.
    pub wins: u64,
    /// Draws split with other players.
    pub ties: u64,
    /// Credit from split draws, `1/k` per draw split `k` ways.
    pub share: f64,
    /// `(wins + share) / total`.
    pub equity: f64,
    /// Outright wins by the winning hand type.
    pub wins_by_type: BTreeMap<HandType, u64>,
}

/// Result of an odds calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    total: u64,
    to_come: usize,
    players: BTreeMap<PlayerId, PlayerOdds>,
}

impl Odds {
    /// Number of possible draws.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Board cards still to come.
    pub fn to_come(&self) -> usize {
        self.to_come
    }

    /// One player's odds.
    pub fn get(&self, player: PlayerId) -> Option<&PlayerOdds> {
        self.players.get(&player)
    }

    /// Odds for every player.
    pub fn players(&self) -> &BTreeMap<PlayerId, PlayerOdds> {
        &self.players
    }

    /// Probability of winning per player, ties split evenly. Sums to 1.
    pub fn probabilities(&self) -> BTreeMap<PlayerId, f64> {
        self.players
            .iter()
            .map(|(&player, odds)| (player, odds.equity))
            .collect()
    }
}

/// Exact winning probabilities with the default configuration.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use holdem_odds::{find_odds, Board, HoleCards};
///
/// let mut players = BTreeMap::new();
/// players.insert(1, "AhAd".parse::<HoleCards>().unwrap());
/// players.insert(2, "KsKc".parse::<HoleCards>().unwrap());
/// let board: Board = "As 7c 2d 9h".parse().unwrap();
///
/// let odds = find_odds(&players, &board).unwrap();
/// assert_eq!(odds.probabilities()[&1], 1.0);
/// ```
pub fn find_odds(
    players: &BTreeMap<PlayerId, HoleCards>,
    board: &Board,
) -> Result<Odds, PokerError> {
    find_odds_with(players, board, &OddsConfig::default())
}

/// Exact winning probabilities.
///
/// # Errors
/// `NoPlayers`, `DuplicateCard` for shared cards, `InsufficientCards` when
/// the undealt cards cannot complete the board, and `Config` for an
/// invalid configuration.
pub fn find_odds_with(
    players: &BTreeMap<PlayerId, HoleCards>,
    board: &Board,
    config: &OddsConfig,
) -> Result<Odds, PokerError> {
    config.validate()?;
    let dead = table_mask(players, board)?;

    let pool = Deck::without(&dead.cards()).remaining_cards().to_vec();
    let to_come = config.game.cards_to_come(board);
    if pool.len() < to_come {
        return Err(PokerError::InsufficientCards {
            needed: to_come,
            available: pool.len(),
        });
    }

    let table = Table {
        seats: players.iter().map(|(&id, &hole)| (id, hole)).collect(),
        board: board.cards(),
        pool,
        to_come,
        parallel: config.parallel,
    };

    match config.thread_pool()? {
        Some(threads) => Ok(threads.install(|| table.walk())),
        None => Ok(table.walk()),
    }
}

/// Everything one calculation reads.
struct Table<'a> {
    seats: Vec<(PlayerId, HoleCards)>,
    board: &'a [Card],
    pool: Vec<Card>,
    to_come: usize,
    parallel: bool,
}

impl Table<'_> {
    fn par_map<I, T, F>(&self, items: &[I], f: F) -> Vec<T>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> T + Sync + Send,
    {
        if self.parallel {
            items.par_iter().map(&f).collect()
        } else {
            items.iter().map(&f).collect()
        }
    }

    fn known(&self, hole: &HoleCards) -> Vec<Card> {
        hole.cards().iter().chain(self.board).copied().collect()
    }

    fn walk(&self) -> Odds {
        let total = binomial(self.pool.len(), self.to_come);

        // outs[type][seat]
        let outs: Vec<Vec<Vec<DrawScenario>>> = self.par_map(&HandType::ALL, |&hand_type| {
            self.seats
                .iter()
                .map(|(_, hole)| {
                    enumerate_outs(hand_type, &self.known(hole), &self.pool, self.to_come)
                })
                .collect::<Vec<_>>()
        });

        let mut tally: BTreeMap<PlayerId, PlayerOdds> = self
            .seats
            .iter()
            .map(|&(player, _)| (player, PlayerOdds::default()))
            .collect();
        let mut settled = ClaimedOuts::new();

        for (&hand_type, by_seat) in HandType::ALL.iter().zip(&outs) {
            if settled.len() as u64 == total {
                break;
            }

            let pending: Vec<Vec<CardMask>> = self.par_map(by_seat, |scenarios| {
                let mut mine = ClaimedOuts::new();
                let mut draws = Vec::new();
                for scenario in scenarios {
                    draws.extend(mine.claim_excluding(scenario, &self.pool, &settled));
                }
                draws
            });

            let mut owners: FxHashMap<CardMask, Vec<usize>> = FxHashMap::default();
            for (seat, draws) in pending.iter().enumerate() {
                for &draw in draws {
                    owners.entry(draw).or_default().push(seat);
                }
            }

            let mut contested: Vec<(CardMask, Vec<(PlayerId, HoleCards)>)> = Vec::new();
            for (&draw, seats) in &owners {
                match seats.as_slice() {
                    [seat] => credit_win(&mut tally, self.seats[*seat].0, hand_type),
                    _ => contested.push((draw, seats.iter().map(|&s| self.seats[s]).collect())),
                }
            }

            let outcomes = self.par_map(&contested, |(draw, contenders)| {
                resolve_draw(hand_type, contenders, self.board, *draw)
            });
            for outcome in outcomes {
                match outcome {
                    DrawOutcome::Winner(player) => credit_win(&mut tally, player, hand_type),
                    DrawOutcome::Tie(players) => {
                        let split = 1.0 / players.len() as f64;
                        for player in players {
                            let odds = tally.entry(player).or_default();
                            odds.ties += 1;
                            odds.share += split;
                        }
                    }
                }
            }

            debug!(
                "{}: {} draws credited, {} contested",
                hand_type,
                owners.len(),
                contested.len()
            );
            for draw in owners.into_keys() {
                settled.insert(draw);
            }
        }

        debug_assert_eq!(settled.len() as u64, total);
        for odds in tally.values_mut() {
            odds.equity = (odds.wins as f64 + odds.share) / total as f64;
        }

        Odds {
            total,
            to_come: self.to_come,
            players: tally,
        }
    }
}

fn credit_win(tally: &mut BTreeMap<PlayerId, PlayerOdds>, player: PlayerId, hand_type: HandType) {
    let odds = tally.entry(player).or_default();
    odds.wins += 1;
    *odds.wins_by_type.entry(hand_type).or_default() += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::best::best_of;
    use crate::eval::combinations::combinations;
    use crate::eval::ranking::compare_hands;
    use std::cmp::Ordering;

    fn table(holes: &[(PlayerId, &str)]) -> BTreeMap<PlayerId, HoleCards> {
        holes
            .iter()
            .map(|&(id, cards)| (id, cards.parse().unwrap()))
            .collect()
    }

    /// Wins and ties per player by dealing out every completion directly.
    fn brute_force(
        players: &BTreeMap<PlayerId, HoleCards>,
        board: &Board,
    ) -> BTreeMap<PlayerId, (u64, u64)> {
        let dead = table_mask(players, board).unwrap();
        let pool: Vec<Card> = Card::all().filter(|c| !dead.contains(*c)).collect();
        let mut counts: BTreeMap<PlayerId, (u64, u64)> =
            players.keys().map(|&p| (p, (0, 0))).collect();

        for draw in combinations(&pool, 5 - board.len()) {
            let mut best: Vec<(PlayerId, crate::eval::Hand)> = Vec::new();
            for (&player, hole) in players {
                let cards: Vec<Card> = hole
                    .cards()
                    .iter()
                    .chain(board.cards())
                    .chain(draw.iter().copied())
                    .copied()
                    .collect();
                let hand = best_of(&cards).hand().clone();
                match best.first().map(|(_, top)| compare_hands(&hand, top)) {
                    None | Some(Ordering::Equal) => best.push((player, hand)),
                    Some(Ordering::Greater) => best = vec![(player, hand)],
                    Some(Ordering::Less) => {}
                }
            }
            let tied = best.len() > 1;
            for (player, _) in best {
                let entry = counts.entry(player).or_default();
                if tied {
                    entry.1 += 1;
                } else {
                    entry.0 += 1;
                }
            }
        }
        counts
    }

    fn assert_matches_brute_force(holes: &[(PlayerId, &str)], board: &str) {
        let players = table(holes);
        let board: Board = board.parse().unwrap();
        let odds = find_odds(&players, &board).unwrap();
        let expected = brute_force(&players, &board);

        for (player, (wins, ties)) in expected {
            let got = odds.get(player).unwrap();
            assert_eq!((got.wins, got.ties), (wins, ties), "player {} on {}", player, board);
        }
        let sum: f64 = odds.probabilities().values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum {}", sum);
    }

    #[test]
    fn test_trip_aces_vs_kings_on_the_turn() {
        let players = table(&[(1, "AhAd"), (2, "KsKc")]);
        let board: Board = "As 7c 2d 9h".parse().unwrap();
        let odds = find_odds(&players, &board).unwrap();

        assert_eq!(odds.total(), 44);
        let probs = odds.probabilities();
        assert_eq!(probs[&1], 1.0);
        assert_eq!(probs[&2], 0.0);
        // the board pairing gives the aces a full house
        assert_eq!(odds.get(1).unwrap().wins_by_type[&HandType::FullHouse], 9);
    }

    #[test]
    fn test_flop_matches_brute_force() {
        assert_matches_brute_force(&[(1, "AhKh"), (2, "QsQd"), (3, "7c8c")], "Jh Th 2c");
        assert_matches_brute_force(&[(1, "9s9d"), (2, "KcKd")], "9h Kh 4h");
    }

    #[test]
    fn test_split_pots_match_brute_force() {
        // wheel and flush draws with identical holdings
        assert_matches_brute_force(&[(1, "Ad5c"), (2, "As5d")], "2h 3h 4c");
    }

    #[test]
    fn test_turn_matches_brute_force() {
        assert_matches_brute_force(
            &[(1, "Ah2h"), (2, "KdKc"), (3, "6s7s"), (4, "Tc9c")],
            "Kh 8h 5s 4d",
        );
    }

    #[test]
    fn test_river_is_decided() {
        let players = table(&[(1, "AhKh"), (2, "QsQd")]);
        let board: Board = "Jh Th 2c 9s 3d".parse().unwrap();
        let odds = find_odds(&players, &board).unwrap();
        assert_eq!(odds.total(), 1);
        assert_eq!(odds.to_come(), 0);
        assert_eq!(odds.probabilities()[&2], 1.0);
        assert_eq!(odds.get(2).unwrap().wins_by_type[&HandType::Pair], 1);
    }

    #[test]
    fn test_single_player_always_wins() {
        let players = table(&[(5, "7c2d")]);
        let board: Board = "As Kd 9h".parse().unwrap();
        let odds = find_odds(&players, &board).unwrap();
        assert_eq!(odds.total(), binomial(47, 2));
        assert_eq!(odds.probabilities()[&5], 1.0);
    }

    #[test]
    fn test_sequential_equals_parallel() {
        let players = table(&[(1, "AhKh"), (2, "QsQd"), (3, "7c8c")]);
        let board: Board = "Jh Th 2c".parse().unwrap();
        let config = OddsConfig::default().with_threads(2);
        let parallel = find_odds_with(&players, &board, &config).unwrap();
        let sequential = find_odds_with(&players, &board, &OddsConfig::sequential()).unwrap();
        for (player, odds) in parallel.players() {
            let other = sequential.get(*player).unwrap();
            assert_eq!((odds.wins, odds.ties), (other.wins, other.ties));
            assert_eq!(odds.wins_by_type, other.wins_by_type);
        }
    }

    #[test]
    fn test_errors() {
        let board: Board = "Jh Th 2c".parse().unwrap();
        assert_eq!(find_odds(&BTreeMap::new(), &board), Err(PokerError::NoPlayers));

        let players = table(&[(1, "AhKh"), (2, "JhQd")]);
        assert!(matches!(find_odds(&players, &board), Err(PokerError::DuplicateCard(_))));

        let players = table(&[(1, "AhKh")]);
        let config = OddsConfig::default().with_threads(0);
        assert_eq!(
            find_odds_with(&players, &board, &config),
            Err(PokerError::Config(crate::error::ConfigError::InvalidThreads))
        );
    }
}
