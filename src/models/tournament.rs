//! Tournament metadata and Swiss bracket summary from the tournament and matchmaking services.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a tournament.
pub type TournamentId = i64;

/// Identifier of a tournament's Swiss bracket.
pub type SwissBracketId = i64;

/// Lifecycle status as reported by the tournament service.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    /// Any status this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TournamentStatus {
    pub fn label(self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Ongoing => "Ongoing",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Cancelled => "Cancelled",
            TournamentStatus::Unknown => "Unknown",
        }
    }
}

/// Tournament format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentType {
    Knockout,
    Swiss,
    /// Swiss rounds followed by a knockout bracket.
    SwissKnockout,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TournamentType {
    pub fn label(self) -> &'static str {
        match self {
            TournamentType::Knockout => "Knockout",
            TournamentType::Swiss => "Swiss",
            TournamentType::SwissKnockout => "Swiss + Knockout",
            TournamentType::Unknown => "Unknown",
        }
    }

    /// Whether the format has a Swiss phase.
    pub fn has_swiss_phase(self) -> bool {
        matches!(self, TournamentType::Swiss | TournamentType::SwissKnockout)
    }
}

/// Tournament metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub min_elo: Option<i32>,
    #[serde(default)]
    pub max_elo: Option<i32>,
    #[serde(default)]
    pub tournament_type: TournamentType,
    #[serde(default)]
    pub swiss_bracket_id: Option<SwissBracketId>,
    #[serde(default)]
    pub max_players: Option<u32>,
}

/// Progress of a Swiss bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissBracket {
    pub current_round: u32,
    pub number_of_rounds: u32,
}
