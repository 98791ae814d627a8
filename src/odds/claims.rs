//! Claiming concrete draws from scenarios.
//!
//! Scenarios overlap freely (`K* **` and `** Q*` share every king-queen
//! draw), so draws are tracked by their concrete card set. A draw, once
//! claimed, is never handed out again by the same `ClaimedOuts`.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use super::scenario::{DrawScenario, Slot};
use crate::cards::{Card, CardMask};
use crate::eval::combinations::combinations;

/// Expand a scenario into every concrete draw it describes.
///
/// Identical slots take combinations of matching cards, distinct slots
/// are crossed, and any draw using a card twice is dropped. The result may
/// repeat a draw when wildcard slots overlap concrete ones.
pub fn expand(scenario: &DrawScenario, pool: &[Card]) -> Vec<CardMask> {
    let mut groups: BTreeMap<Slot, usize> = BTreeMap::new();
    for slot in scenario.slots() {
        *groups.entry(*slot).or_default() += 1;
    }

    let mut draws = vec![CardMask::EMPTY];
    for (slot, count) in groups {
        let matching: Vec<Card> = pool.iter().copied().filter(|c| slot.matches(*c)).collect();
        let picks: Vec<CardMask> = combinations(&matching, count)
            .map(|cards| CardMask::from_cards(cards))
            .collect();

        draws = draws
            .iter()
            .flat_map(|draw| {
                picks
                    .iter()
                    .filter(move |pick| !draw.overlaps(**pick))
                    .map(move |pick| draw.union(*pick))
            })
            .collect();
        if draws.is_empty() {
            break;
        }
    }
    draws
}

/// Draws already handed out.
#[derive(Debug, Clone, Default)]
pub struct ClaimedOuts {
    claimed: FxHashSet<CardMask>,
}

impl ClaimedOuts {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim every draw of `scenario` not claimed before.
    ///
    /// Returns the newly claimed draws; claiming the same scenario twice
    /// returns nothing the second time.
    pub fn claim(&mut self, scenario: &DrawScenario, pool: &[Card]) -> Vec<CardMask> {
        expand(scenario, pool)
            .into_iter()
            .filter(|draw| self.claimed.insert(*draw))
            .collect()
    }

    /// Like [`claim`](Self::claim), also skipping draws held by `settled`.
    pub fn claim_excluding(
        &mut self,
        scenario: &DrawScenario,
        pool: &[Card],
        settled: &ClaimedOuts,
    ) -> Vec<CardMask> {
        expand(scenario, pool)
            .into_iter()
            .filter(|draw| !settled.is_claimed(*draw) && self.claimed.insert(*draw))
            .collect()
    }

    /// Mark a draw as claimed; false if it already was.
    pub fn insert(&mut self, draw: CardMask) -> bool {
        self.claimed.insert(draw)
    }

    /// Whether a draw is claimed.
    #[inline]
    pub fn is_claimed(&self, draw: CardMask) -> bool {
        self.claimed.contains(&draw)
    }

    /// Number of claimed draws.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Check whether nothing is claimed.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Claimed draws, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = CardMask> + '_ {
        self.claimed.iter().copied()
    }
}
