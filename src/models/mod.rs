//! Data structures for the chess tournament viewer: backend payloads and derived bracket shapes.

mod bracket;
mod game;
mod player;
mod standing;
mod tournament;

pub use bracket::{Round, Seed, SeedTeam, PENDING_ID, PENDING_NAME};
pub use game::{GameMatch, MatchId, RoundType};
pub use player::{PlayerId, PlayerRef, StandingPlayer};
pub use standing::{RankedStanding, StandingEntry};
pub use tournament::{
    SwissBracket, SwissBracketId, Tournament, TournamentId, TournamentStatus, TournamentType,
};
