//! Bubble sort: repeated adjacent-swap passes.

use std::time::Duration;

use crate::record::Record;
use crate::utils::timed;

/// Sort records ascending by name with classic bubble sort, repeating
/// full passes until one completes with zero swaps. O(n^2) worst case;
/// relative order of equal names is not guaranteed.
pub fn bubble_sort(mut records: Vec<Record>) -> (Vec<Record>, Duration) {
    timed(move || {
        let mut swapped = true;
        while swapped {
            swapped = false;
            for i in 1..records.len() {
                if records[i].name < records[i - 1].name {
                    records.swap(i, i - 1);
                    swapped = true;
                }
            }
        }
        records
    })
}
