//! Chess tournament viewer: library with backend models, bracket logic, backend client and view models.

pub mod client;
pub mod config;
pub mod logic;
pub mod models;
pub mod routes;
pub mod views;

pub use client::{BackendClient, ClientError, Image, ImageCache, ImageKind};
pub use config::{BackendUrls, Config, ConfigError};
pub use logic::{
    group_by_round, group_swiss_rounds, match_outcome, partition, project, MatchOutcome,
    Partition, SwissRounds,
};
pub use models::{
    GameMatch, MatchId, PlayerId, PlayerRef, RankedStanding, Round, RoundType, Seed, SeedTeam,
    StandingEntry, StandingPlayer, SwissBracket, Tournament, TournamentId, TournamentStatus,
    TournamentType,
};
