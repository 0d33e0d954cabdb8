//! Knockout bracket view: rounds newest first, each seed with per-team outcome.

use crate::logic::{group_by_round, match_outcome, newest_first, partition, MatchOutcome};
use crate::models::{GameMatch, MatchId, PlayerId, Seed, SeedTeam};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamView {
    pub id: PlayerId,
    pub name: String,
    pub outcome: MatchOutcome,
}

impl TeamView {
    pub(crate) fn new(team: &SeedTeam, other: &SeedTeam, winner_id: Option<PlayerId>) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            outcome: match_outcome(winner_id, team.id, other.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedView {
    pub id: MatchId,
    pub winner_id: Option<PlayerId>,
    pub teams: [TeamView; 2],
    /// Bye: no players recorded but a winner is. Rendered without outcome colors.
    pub auto_advance: bool,
}

impl From<&Seed> for SeedView {
    fn from(seed: &Seed) -> Self {
        let [a, b] = &seed.teams;
        Self {
            id: seed.id,
            winner_id: seed.winner_id,
            teams: [
                TeamView::new(a, b, seed.winner_id),
                TeamView::new(b, a, seed.winner_id),
            ],
            auto_advance: seed.is_auto_advance(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundView {
    pub title: String,
    pub seeds: Vec<SeedView>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KnockoutView {
    pub rounds: Vec<RoundView>,
}

/// Bracket for the knockout phase of a tournament's matches. Swiss matches are left out.
pub fn knockout_view(matches: &[GameMatch]) -> KnockoutView {
    let knockout = partition(matches).knockout;
    let rounds = newest_first(group_by_round(&knockout))
        .iter()
        .map(|r| RoundView {
            title: r.title.clone(),
            seeds: r.seeds.iter().map(SeedView::from).collect(),
        })
        .collect();
    KnockoutView { rounds }
}
