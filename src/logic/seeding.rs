//! Player-slot normalization shared by knockout and Swiss views.

use crate::models::{GameMatch, PlayerRef, Seed, SeedTeam};

/// Team for one side of a match: the player, or "Pending" (id 0) when the slot is empty.
pub fn seed_team(player: Option<&PlayerRef>) -> SeedTeam {
    match player {
        Some(p) => SeedTeam {
            id: p.id,
            name: p.display_name(),
        },
        None => SeedTeam::pending(),
    }
}

/// Build the bracket seed for a match. `teams[0]` comes from player1.
pub fn seed_from_match(m: &GameMatch) -> Seed {
    Seed {
        id: m.id,
        winner_id: m.winner_id,
        teams: [seed_team(m.player1.as_ref()), seed_team(m.player2.as_ref())],
    }
}
