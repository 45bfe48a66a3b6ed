//! Search algorithms over phonebook records.
//!
//! Three algorithms with deliberately asymmetric match semantics: the
//! linear scan matches on substring containment against the raw line
//! text, while jump and binary search require exact name equality over a
//! name-sorted sequence. The asymmetry is a preserved property of the
//! reference tool, not an accident.

mod binary;
mod jump;
mod linear;

pub use binary::binary_search;
pub use jump::jump_search;
pub use linear::{count_substring_matches, linear_search};

use std::time::Duration;

use crate::record::Record;
use crate::utils::timed;

/// Signature shared by the exact-match algorithms. A plain `fn` pointer
/// keeps the harness dispatch static.
pub type SearchFn = fn(&str, &[Record]) -> Option<usize>;

/// Look up every target with `search`, counting the ones that were found,
/// and report the wall-clock time of the whole matching loop. A target
/// that is not found is a normal outcome; the loop always continues.
pub fn count_matches(
    targets: &[String],
    records: &[Record],
    search: SearchFn,
) -> (usize, Duration) {
    timed(|| {
        targets
            .iter()
            .filter(|target| search(target.as_str(), records).is_some())
            .count()
    })
}
