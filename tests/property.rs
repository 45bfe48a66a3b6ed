//! Property-based tests using proptest.
//!
//! These verify the cross-algorithm invariants for randomly generated
//! phonebooks: both sorters agree, both exact searches agree with each
//! other and with the hash index, and the substring scan can only ever
//! find more than the exact strategies.

use proptest::prelude::*;

use phonebook_bench::index::build_index;
use phonebook_bench::record::Record;
use phonebook_bench::search::{binary_search, count_matches, jump_search, linear_search};
use phonebook_bench::sort::{bubble_sort, quick_sort};

/// Generate word-like name parts.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,8}( [A-Za-z]{1,8})?").unwrap()
}

/// Generate raw phonebook lines in the `<number> <name>` format.
fn book_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (0i64..10_000, name_strategy()).prop_map(|(n, name)| format!("{n} {name}")),
        0..40,
    )
}

fn parse_book(lines: &[String]) -> Vec<Record> {
    lines.iter().map(|l| Record::parse(l)).collect()
}

fn names(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

proptest! {
    #[test]
    fn sorters_produce_identical_orderings(lines in book_strategy()) {
        let (bubbled, _) = bubble_sort(parse_book(&lines));
        let (quicked, _) = quick_sort(parse_book(&lines));
        prop_assert_eq!(names(&bubbled), names(&quicked));

        let mut expected = names(&bubbled);
        expected.sort();
        prop_assert_eq!(names(&bubbled), expected);
    }

    #[test]
    fn sorting_is_idempotent(lines in book_strategy()) {
        let (once, _) = quick_sort(parse_book(&lines));
        let (twice, _) = quick_sort(once.clone());
        prop_assert_eq!(&once, &twice);
        let (bubbled, _) = bubble_sort(once.clone());
        prop_assert_eq!(&once, &bubbled);
    }

    #[test]
    fn present_names_are_found_exactly(lines in book_strategy()) {
        let (sorted, _) = quick_sort(parse_book(&lines));
        for record in &sorted {
            let via_binary = binary_search(&record.name, &sorted);
            let via_jump = jump_search(&record.name, &sorted);
            let b = via_binary.expect("binary search missed a present name");
            let j = via_jump.expect("jump search missed a present name");
            prop_assert_eq!(&sorted[b].name, &record.name);
            prop_assert_eq!(&sorted[j].name, &record.name);
        }
    }

    #[test]
    fn absent_names_are_not_found(lines in book_strategy(), target in name_strategy()) {
        let (sorted, _) = quick_sort(parse_book(&lines));
        prop_assume!(!sorted.iter().any(|r| r.name == target));
        prop_assert_eq!(binary_search(&target, &sorted), None);
        prop_assert_eq!(jump_search(&target, &sorted), None);
    }

    #[test]
    fn hash_and_binary_counts_agree(
        lines in book_strategy(),
        targets in prop::collection::vec(name_strategy(), 0..20),
    ) {
        let (sorted, _) = quick_sort(parse_book(&lines));
        let (index, _) = build_index(&lines);

        let (via_binary, _) = count_matches(&targets, &sorted, binary_search);
        let via_hash = targets.iter().filter(|t| index.contains_key(t.as_str())).count();
        prop_assert_eq!(via_binary, via_hash);

        // The substring scan is strictly looser.
        let via_linear = targets.iter().filter(|t| linear_search(t, &lines)).count();
        prop_assert!(via_linear >= via_binary);
    }
}
