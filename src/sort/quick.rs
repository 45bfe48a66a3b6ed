//! Quicksort with Lomuto partitioning.

use std::time::Duration;

use crate::record::Record;
use crate::utils::timed;

/// Sort records ascending by name with quicksort, choosing the last
/// element of each sub-range as pivot (Lomuto scheme). Not stable;
/// average O(n log n), worst case O(n^2) on already-sorted input.
///
/// Sub-ranges are processed from an explicit stack rather than by
/// recursion, so adversarial input cannot overflow the call stack.
pub fn quick_sort(mut records: Vec<Record>) -> (Vec<Record>, Duration) {
    timed(move || {
        if records.len() > 1 {
            let mut ranges = vec![(0, records.len() - 1)];
            while let Some((lo, hi)) = ranges.pop() {
                let pivot = partition(&mut records, lo, hi);
                if pivot > lo + 1 {
                    ranges.push((lo, pivot - 1));
                }
                if pivot + 1 < hi {
                    ranges.push((pivot + 1, hi));
                }
            }
        }
        records
    })
}

/// Partition `records[lo..=hi]` around the name at `hi`, returning the
/// pivot's final resting index. Everything left of it compares strictly
/// less than the pivot name.
fn partition(records: &mut [Record], lo: usize, hi: usize) -> usize {
    let mut boundary = lo;
    for j in lo..hi {
        if records[j].name < records[hi].name {
            records.swap(boundary, j);
            boundary += 1;
        }
    }
    records.swap(boundary, hi);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(lines: &[&str]) -> Vec<Record> {
        lines.iter().map(|l| Record::parse(l)).collect()
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut records = book(&["1 Delta", "2 Alpha", "3 Echo", "4 Bravo", "5 Charlie"]);
        let hi = records.len() - 1;
        let p = partition(&mut records, 0, hi);
        assert_eq!(records[p].name, "Charlie");
        for r in &records[..p] {
            assert!(r.name < records[p].name);
        }
        for r in &records[p + 1..] {
            assert!(r.name >= records[p].name);
        }
    }

    #[test]
    fn test_quick_sort_reverse_input() {
        let (sorted, _) = quick_sort(book(&["1 Zed", "2 Mike", "3 Echo", "4 Alpha"]));
        let names: Vec<_> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Echo", "Mike", "Zed"]);
    }
}
