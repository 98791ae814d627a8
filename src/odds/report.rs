//! JSON export of rankings and odds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::aggregate::Odds;
use crate::cards::{Board, Card, HoleCards};
use crate::eval::{GameType, HandType, Ranking};
use crate::PlayerId;

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Game variant
    pub game: GameType,
    /// Board at the time of the report
    pub board: Vec<Card>,
    /// Timestamp
    pub timestamp: String,
}

/// Odds for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerOddsEntry {
    /// Player id
    pub player: PlayerId,
    /// Hole cards
    pub hole: HoleCards,
    /// Draws won outright
    pub wins: u64,
    /// Draws split
    pub ties: u64,
    /// Winning probability
    pub equity: f64,
    /// Outright wins by hand type
    pub wins_by_type: BTreeMap<HandType, u64>,
}

/// Exported odds for a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Number of possible draws
    pub total_draws: u64,
    /// Per-player odds, by player id
    pub players: Vec<PlayerOddsEntry>,
}

impl OddsReport {
    /// Create a report from an odds result computed for `game`.
    pub fn new(
        game: GameType,
        players: &BTreeMap<PlayerId, HoleCards>,
        board: &Board,
        odds: &Odds,
    ) -> Self {
        let entries = players
            .iter()
            .filter_map(|(&player, &hole)| {
                odds.get(player).map(|o| PlayerOddsEntry {
                    player,
                    hole,
                    wins: o.wins,
                    ties: o.ties,
                    equity: o.equity,
                    wins_by_type: o.wins_by_type.clone(),
                })
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                game,
                board: board.cards().to_vec(),
                timestamp: chrono_lite_timestamp(),
            },
            total_draws: odds.total(),
            players: entries,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

/// One rank of a ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankEntry {
    /// Rank, 1 = best
    pub rank: usize,
    /// Players sharing the rank
    pub players: Vec<PlayerId>,
    /// Hand type
    pub hand_type: HandType,
    /// Hand description
    pub description: String,
    /// Cards of the first player's hand
    pub cards: Vec<Card>,
}

/// Exported ranking of a showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    /// Timestamp
    pub timestamp: String,
    /// Ranks, best first
    pub ranks: Vec<RankEntry>,
}

impl RankingReport {
    /// Create a report from a ranking.
    pub fn from_ranking(ranking: &Ranking) -> Self {
        let ranks = ranking
            .groups()
            .iter()
            .map(|(&rank, group)| RankEntry {
                rank,
                players: group.players.clone(),
                hand_type: group.hand.hand_type(),
                description: group.description.clone(),
                cards: group.hand.cards().to_vec(),
            })
            .collect();

        Self {
            timestamp: chrono_lite_timestamp(),
            ranks,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

/// Simple timestamp without external dependencies.
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}
