//! Group matches by round for the results view.

use crate::domain::model::{Match, RoundGroup};
use std::collections::HashMap;

/// Bucket matches by round number, groups ascending by round, matches
/// in their original order within each group.
pub fn group_by_round(matches: &[Match]) -> Vec<RoundGroup> {
    let mut buckets: HashMap<u32, Vec<Match>> = HashMap::new();
    for m in matches {
        buckets.entry(m.round).or_default().push(m.clone());
    }

    let mut rounds: Vec<u32> = buckets.keys().copied().collect();
    rounds.sort_unstable();

    rounds
        .into_iter()
        .map(|round| RoundGroup {
            round,
            matches: buckets.remove(&round).unwrap_or_default(),
        })
        .collect()
}
