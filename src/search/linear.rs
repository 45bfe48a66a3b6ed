//! Linear scan with substring matching.

use std::time::Duration;

use crate::utils::timed;

/// Scan every phonebook line for `target`, reporting a match if any line
/// *contains* it as a substring. The line text includes the number, so a
/// numeric fragment can match too. Looser than the exact-equality
/// semantics of the sorted algorithms, by design.
pub fn linear_search(target: &str, lines: &[String]) -> bool {
    lines.iter().any(|line| line.contains(target))
}

/// Count how many targets the linear scan finds, timing the whole loop.
pub fn count_substring_matches(targets: &[String], lines: &[String]) -> (usize, Duration) {
    timed(|| {
        targets
            .iter()
            .filter(|target| linear_search(target.as_str(), lines))
            .count()
    })
}
