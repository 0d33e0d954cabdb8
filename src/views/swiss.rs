//! Swiss rounds view: highest round first, current round flagged.

use crate::logic::{group_swiss_rounds, is_current_round, partition, seed_team, swiss_round_title};
use crate::models::{GameMatch, MatchId, PlayerId, SwissBracket};
use crate::views::bracket::TeamView;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissMatchView {
    pub id: MatchId,
    pub winner_id: Option<PlayerId>,
    pub players: [TeamView; 2],
}

impl From<&GameMatch> for SwissMatchView {
    fn from(m: &GameMatch) -> Self {
        let a = seed_team(m.player1.as_ref());
        let b = seed_team(m.player2.as_ref());
        Self {
            id: m.id,
            winner_id: m.winner_id,
            players: [
                TeamView::new(&a, &b, m.winner_id),
                TeamView::new(&b, &a, m.winner_id),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissRoundView {
    pub title: String,
    pub round_number: Option<u32>,
    pub is_current: bool,
    pub matches: Vec<SwissMatchView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissView {
    pub current_round: u32,
    pub number_of_rounds: u32,
    pub rounds: Vec<SwissRoundView>,
}

/// Swiss phase of a tournament's matches, with the bracket's current round flagged.
pub fn swiss_view(matches: &[GameMatch], bracket: &SwissBracket) -> SwissView {
    let current_round = Some(bracket.current_round);
    let swiss = partition(matches).swiss;
    let rounds = group_swiss_rounds(&swiss)
        .newest_first()
        .into_iter()
        .map(|(number, ms)| SwissRoundView {
            title: swiss_round_title(number),
            round_number: number,
            is_current: is_current_round(number, current_round),
            matches: ms.iter().map(SwissMatchView::from).collect(),
        })
        .collect();
    SwissView {
        current_round: bracket.current_round,
        number_of_rounds: bracket.number_of_rounds,
        rounds,
    }
}
