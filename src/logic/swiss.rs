//! Swiss phase: split a tournament's matches by phase, then bucket Swiss matches by round number.

use crate::logic::grouping::OrderedBuckets;
use crate::models::GameMatch;

/// A tournament's matches split by phase, each side in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub swiss: Vec<GameMatch>,
    pub knockout: Vec<GameMatch>,
}

/// Split matches on `swissRoundNumber`: set → Swiss, missing → knockout.
pub fn partition(matches: &[GameMatch]) -> Partition {
    let (swiss, knockout): (Vec<_>, Vec<_>) = matches.iter().cloned().partition(GameMatch::is_swiss);
    Partition { swiss, knockout }
}

/// Display key of a Swiss round: "Round 3", or "Round Unknown" without a number.
pub fn swiss_round_title(number: Option<u32>) -> String {
    match number {
        Some(n) => format!("Round {n}"),
        None => "Round Unknown".to_string(),
    }
}

/// Whether a bucket is the round the bracket is currently playing.
pub fn is_current_round(number: Option<u32>, current_round: Option<u32>) -> bool {
    matches!((number, current_round), (Some(n), Some(c)) if n == c)
}

/// Swiss matches bucketed by round, buckets in first-appearance order.
#[derive(Clone, Debug, Default)]
pub struct SwissRounds {
    buckets: OrderedBuckets<Option<u32>, GameMatch>,
}

impl SwissRounds {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Round titles in first-appearance order.
    pub fn titles(&self) -> Vec<String> {
        self.buckets.keys().map(|n| swiss_round_title(*n)).collect()
    }

    /// Matches under a title such as "Round 2" or "Round Unknown".
    pub fn get(&self, title: &str) -> Option<&[GameMatch]> {
        self.buckets
            .iter()
            .find(|(n, _)| swiss_round_title(**n) == title)
            .map(|(_, ms)| ms)
    }

    /// (round number, matches) in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<u32>, &[GameMatch])> {
        self.buckets.iter().map(|(n, ms)| (*n, ms))
    }

    /// Highest round number first; the unnumbered bucket goes last.
    pub fn newest_first(&self) -> Vec<(Option<u32>, &[GameMatch])> {
        let mut rounds: Vec<_> = self.iter().collect();
        // Some(_) > None, so a plain descending sort leaves None at the end.
        rounds.sort_by(|(a, _), (b, _)| b.cmp(a));
        rounds
    }
}

/// Bucket Swiss matches under their round number. Matches without one are kept
/// under "Round Unknown".
pub fn group_swiss_rounds(matches: &[GameMatch]) -> SwissRounds {
    SwissRounds {
        buckets: matches
            .iter()
            .map(|m| (m.swiss_round_number, m.clone()))
            .collect(),
    }
}
