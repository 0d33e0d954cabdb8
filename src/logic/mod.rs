//! Bracket logic: round grouping, Swiss partitioning, standings.

mod grouping;
mod outcome;
mod rounds;
mod seeding;
mod standings;
mod swiss;

pub use grouping::OrderedBuckets;
pub use outcome::{match_outcome, MatchOutcome};
pub use rounds::{group_by_round, newest_first};
pub use seeding::{seed_from_match, seed_team};
pub use standings::{project, win_rate};
pub use swiss::{
    group_swiss_rounds, is_current_round, partition, swiss_round_title, Partition, SwissRounds,
};
