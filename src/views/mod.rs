//! View models served to the browser: bracket, Swiss rounds, standings, tournament card.

mod bracket;
mod standings;
mod swiss;
mod tournament;

pub use bracket::{knockout_view, KnockoutView, RoundView, SeedView, TeamView};
pub use standings::{standings_csv, standings_rows, StandingRow};
pub use swiss::{swiss_view, SwissMatchView, SwissRoundView, SwissView};
pub use tournament::{elo_range, tournament_view, TournamentView};

/// Served when a player or tournament has no photo.
pub const DEFAULT_IMAGE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" fill="#d9d9d9"/><circle cx="32" cy="24" r="12" fill="#9e9e9e"/><path d="M10 58c2-12 12-18 22-18s20 6 22 18z" fill="#9e9e9e"/></svg>"##;
