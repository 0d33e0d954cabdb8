//! Standings table: rank and win rate on top of the backend's ordering.

use crate::models::{RankedStanding, StandingEntry};

/// Win rate in percent, one decimal place.
///
/// No losses reads as 100, including a player with no games at all.
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    if losses == 0 {
        return 100.0;
    }
    let total = f64::from(wins) + f64::from(losses);
    (f64::from(wins) / total * 1000.0).round() / 10.0
}

/// Annotate standings with `rank = index + 1` and win rate. Order is the backend's.
pub fn project(standings: &[StandingEntry]) -> Vec<RankedStanding> {
    standings
        .iter()
        .enumerate()
        .map(|(i, s)| RankedStanding {
            rank: i + 1,
            player: s.player.clone(),
            wins: s.wins,
            losses: s.losses,
            win_rate: win_rate(s.wins, s.losses),
        })
        .collect()
}
