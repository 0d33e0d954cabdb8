//! Knockout bracket: group matches into named rounds of seeds.

use crate::logic::grouping::OrderedBuckets;
use crate::logic::seeding::seed_from_match;
use crate::models::{GameMatch, Round, Seed};

/// Group matches into rounds by `roundType.roundName`.
///
/// 1. Skip matches without a round type.
/// 2. Build one seed per remaining match.
/// 3. Rounds come out in the order their names first appear; seeds keep source order.
pub fn group_by_round(matches: &[GameMatch]) -> Vec<Round> {
    let buckets: OrderedBuckets<String, Seed> = matches
        .iter()
        .filter_map(|m| m.round_name().map(|name| (name.to_string(), seed_from_match(m))))
        .collect();

    buckets
        .into_vec()
        .into_iter()
        .map(|(title, seeds)| Round { title, seeds })
        .collect()
}

/// Reverse round order so the most recent round is displayed first.
pub fn newest_first(mut rounds: Vec<Round>) -> Vec<Round> {
    rounds.reverse();
    rounds
}
