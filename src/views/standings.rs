//! Standings table rows and their CSV export.

use crate::logic::project;
use crate::models::{PlayerId, StandingEntry};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub elo_rating: Option<f64>,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

/// One row per entry, in the backend's order.
pub fn standings_rows(entries: &[StandingEntry]) -> Vec<StandingRow> {
    project(entries)
        .into_iter()
        .map(|s| StandingRow {
            rank: s.rank,
            player_id: s.player.id,
            name: s.player.display_name(),
            elo_rating: s.player.elo_rating,
            wins: s.wins,
            losses: s.losses,
            win_rate: s.win_rate,
        })
        .collect()
}

/// CSV with a header row, same columns as the JSON rows.
pub fn standings_csv(rows: &[StandingRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}
