//! Jump search over a name-sorted sequence.

use crate::record::Record;

/// Block-skipping search for an exact name match, block size
/// floor(sqrt(n)). Advances block by block while the boundary name is
/// still less than the target, then scans backwards inside the
/// overshot block. Returns `None` for an empty sequence, when the last
/// index is reached without satisfying the bound, or when the backward
/// scan crosses into the previous block.
pub fn jump_search(target: &str, records: &[Record]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }

    let last = records.len() - 1;
    let step = (records.len() as f64).sqrt().floor() as usize;
    let mut current = 0;
    let mut previous = 0;

    // Move block to block until the boundary name reaches the target.
    while records[current].name.as_str() < target {
        if current == last {
            return None;
        }
        previous = current;
        current = (current + step).min(last);
    }

    // Backwards linear scan inside the block. Stepping onto (or past)
    // the previous boundary means the target is not there: that boundary
    // already compared less than the target.
    while records[current].name.as_str() > target {
        if current == previous {
            return None;
        }
        current -= 1;
        if current == previous {
            return None;
        }
    }

    (records[current].name == target).then_some(current)
}
