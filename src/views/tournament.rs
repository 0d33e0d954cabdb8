//! Tournament description card.

use crate::models::{SwissBracketId, Tournament, TournamentId};
use chrono::NaiveDateTime;
use serde::Serialize;

const DATE_FORMAT: &str = "%d %b %Y, %H:%M";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView {
    pub id: TournamentId,
    pub name: String,
    pub description: Option<String>,
    pub status: &'static str,
    pub format: &'static str,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub elo_range: String,
    pub max_players: Option<u32>,
    pub has_swiss_phase: bool,
    pub swiss_bracket_id: Option<SwissBracketId>,
    pub photo_url: String,
}

fn format_date(date: Option<NaiveDateTime>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

/// "1200 - 1800", "1200+", "Up to 1800" or "Open".
pub fn elo_range(min: Option<i32>, max: Option<i32>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{} - {}", lo, hi),
        (Some(lo), None) => format!("{}+", lo),
        (None, Some(hi)) => format!("Up to {}", hi),
        (None, None) => "Open".to_string(),
    }
}

pub fn tournament_view(t: &Tournament) -> TournamentView {
    TournamentView {
        id: t.id,
        name: t.name.clone(),
        description: t.description.clone(),
        status: t.status.label(),
        format: t.tournament_type.label(),
        start_date: format_date(t.start_date),
        end_date: format_date(t.end_date),
        elo_range: elo_range(t.min_elo, t.max_elo),
        max_players: t.max_players,
        has_swiss_phase: t.tournament_type.has_swiss_phase() || t.swiss_bracket_id.is_some(),
        swiss_bracket_id: t.swiss_bracket_id,
        photo_url: format!("/api/tournaments/{}/photo", t.id),
    }
}
