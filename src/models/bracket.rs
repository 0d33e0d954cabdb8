//! Derived bracket structures: Seed, SeedTeam and Round.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Team id used for an unresolved slot.
pub const PENDING_ID: PlayerId = 0;
/// Team name used for an unresolved slot.
pub const PENDING_NAME: &str = "Pending";

/// One side of a seed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedTeam {
    pub id: PlayerId,
    pub name: String,
}

impl SeedTeam {
    pub fn pending() -> Self {
        Self {
            id: PENDING_ID,
            name: PENDING_NAME.to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.id == PENDING_ID
    }
}

/// One bracket slot, built from one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub id: MatchId,
    pub winner_id: Option<PlayerId>,
    /// `teams[0]` is always player1.
    pub teams: [SeedTeam; 2],
}

impl Seed {
    /// A bye: neither slot was ever filled, yet a winner is recorded.
    pub fn is_auto_advance(&self) -> bool {
        self.teams[0].is_pending() && self.teams[1].is_pending() && self.winner_id.is_some()
    }
}

/// A named knockout round and its seeds in source order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub title: String,
    pub seeds: Vec<Seed>,
}
