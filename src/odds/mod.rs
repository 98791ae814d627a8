//! Exact winning odds from a partially dealt board.
//!
//! - `scenario`: Wildcard notation for families of draws (`K* **`)
//! - `outs`: Scenarios completing each hand type for a player
//! - `claims`: Concrete draws handed out at most once
//! - `tiebreak`: Settling draws several players complete
//! - `aggregate`: The strongest-first walk producing `Odds`
//! - `config`: Calculation options
//! - `report`: JSON export

pub mod aggregate;
pub mod claims;
pub mod config;
pub mod outs;
pub mod report;
pub mod scenario;
pub mod tiebreak;

pub use aggregate::{find_odds, find_odds_with, Odds, PlayerOdds};
pub use claims::{expand, ClaimedOuts};
pub use config::OddsConfig;
pub use outs::enumerate_outs;
pub use report::{OddsReport, RankingReport};
pub use scenario::{DrawScenario, RankPattern, Slot, SuitPattern};
pub use tiebreak::{resolve_draw, DrawOutcome};
