//! Swiss standings: the backend's tallies and their ranked projection.

use crate::models::player::StandingPlayer;
use serde::{Deserialize, Serialize};

/// A player's win/loss tally, as ranked by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player: StandingPlayer,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

/// A standing annotated for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStanding {
    /// 1-based position in the backend's order.
    pub rank: usize,
    pub player: StandingPlayer,
    pub wins: u32,
    pub losses: u32,
    /// Percentage with one decimal place.
    pub win_rate: f64,
}
