//! Win/loss/undecided state of one side of a match.

use crate::models::PlayerId;
use serde::{Deserialize, Serialize};

/// How a match went for one of its players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Won,
    Lost,
    Undecided,
}

/// Outcome for `player_id` in a match against `other_player_id`.
///
/// A recorded winner that is neither player (a bye against a pending slot)
/// counts as a loss for `player_id`.
pub fn match_outcome(
    winner_id: Option<PlayerId>,
    player_id: PlayerId,
    other_player_id: PlayerId,
) -> MatchOutcome {
    match winner_id {
        None => MatchOutcome::Undecided,
        Some(w) if w == player_id => MatchOutcome::Won,
        Some(w) if w == other_player_id => MatchOutcome::Lost,
        // A winner outside this pairing reads the same as the opponent winning.
        Some(_) => MatchOutcome::Lost,
    }
}
