//! Match records as served by the matchmaking service, and the RoundType they carry.

use crate::models::player::{PlayerId, PlayerRef};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = i64;

/// Named knockout round a match was assigned to (e.g. "Quarterfinal").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundType {
    pub round_name: String,
}

/// A single match. Read-only on this side; every field but `id` may be missing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// None while the slot is still "Pending".
    #[serde(default)]
    pub player1: Option<PlayerRef>,
    #[serde(default)]
    pub player2: Option<PlayerRef>,
    /// None if not yet decided.
    #[serde(default)]
    pub winner_id: Option<PlayerId>,
    /// None when the match has not been placed in a knockout round yet.
    #[serde(default)]
    pub round_type: Option<RoundType>,
    /// Set for matches of the Swiss phase.
    #[serde(default)]
    pub swiss_round_number: Option<u32>,
}

impl GameMatch {
    /// A match with no players, no winner and no round.
    pub fn new(id: MatchId) -> Self {
        Self {
            id,
            player1: None,
            player2: None,
            winner_id: None,
            round_type: None,
            swiss_round_number: None,
        }
    }

    pub fn with_players(mut self, player1: Option<PlayerRef>, player2: Option<PlayerRef>) -> Self {
        self.player1 = player1;
        self.player2 = player2;
        self
    }

    pub fn with_winner(mut self, winner_id: Option<PlayerId>) -> Self {
        self.winner_id = winner_id;
        self
    }

    pub fn in_round(mut self, round_name: impl Into<String>) -> Self {
        self.round_type = Some(RoundType {
            round_name: round_name.into(),
        });
        self
    }

    pub fn in_swiss_round(mut self, number: u32) -> Self {
        self.swiss_round_number = Some(number);
        self
    }

    /// Round name, if the match belongs to a knockout round.
    pub fn round_name(&self) -> Option<&str> {
        self.round_type.as_ref().map(|r| r.round_name.as_str())
    }

    pub fn is_swiss(&self) -> bool {
        self.swiss_round_number.is_some()
    }
}
