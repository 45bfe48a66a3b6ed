//! Binary search over a name-sorted sequence.

use std::cmp::Ordering;

use crate::record::Record;

/// Iterative binary search for an exact name match. Returns `None` once
/// the search interval collapses without hitting the target.
pub fn binary_search(target: &str, records: &[Record]) -> Option<usize> {
    let mut left = 0;
    let mut right = records.len();

    while left < right {
        let middle = left + (right - left) / 2;
        match records[middle].name.as_str().cmp(target) {
            Ordering::Less => left = middle + 1,
            Ordering::Greater => right = middle,
            Ordering::Equal => return Some(middle),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_book(lines: &[&str]) -> Vec<Record> {
        let mut records: Vec<Record> = lines.iter().map(|l| Record::parse(l)).collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    #[test]
    fn test_finds_every_present_name() {
        let book = sorted_book(&[
            "1 Alice Adams",
            "2 Bob Brown",
            "3 Carol Clark",
            "4 Dan Dale",
            "5 Erin Engel",
        ]);
        for (i, record) in book.iter().enumerate() {
            assert_eq!(binary_search(&record.name, &book), Some(i));
        }
    }

    #[test]
    fn test_absent_targets_collapse_to_none() {
        let book = sorted_book(&["2 Bob Brown", "4 Dan Dale"]);
        assert_eq!(binary_search("Aaron", &book), None);
        assert_eq!(binary_search("Carl", &book), None);
        assert_eq!(binary_search("Zoe", &book), None);
        assert_eq!(binary_search("Anyone", &[]), None);
    }

    #[test]
    fn test_exact_equality_only() {
        let book = sorted_book(&["123 Fred Smith", "456 Jane Doe"]);
        assert_eq!(binary_search("Doe", &book), None);
        assert_eq!(binary_search("Fred Smith", &book), Some(0));
    }
}
