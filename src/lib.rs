//! # Phonebook-Bench
//!
//! Benchmarks four strategies for locating records (name -> number
//! lookups) in a flat-text phonebook: linear substring scan,
//! bubble sort + jump search, quicksort + binary search, and hash-table
//! lookup. Each strategy re-reads the same two inputs, runs its prepare
//! and search phases, and reports per-phase wall-clock timings.

pub mod datagen;
pub mod errors;
pub mod harness;
pub mod index;
pub mod record;
pub mod search;
pub mod sort;
pub mod source;
pub mod strategy;
pub mod tui;
pub mod utils;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::errors::BenchError;
    pub use crate::harness::{run_all, run_strategy, NullSink, ReportSink, StrategyReport};
    pub use crate::record::Record;
    pub use crate::source::{FileSource, LineSource, MemorySource};
    pub use crate::strategy::Strategy;
}

#[cfg(test)]
mod tests {
    use crate::datagen::DataGen;
    use crate::harness::{run_all, NullSink};
    use crate::source::MemorySource;
    use crate::strategy::Strategy;

    #[test]
    fn test_all_strategies_agree_on_exact_match_counts() {
        let mut gen = DataGen::new(42);
        let book = gen.phonebook(300);
        let finds = gen.queries(&book, 120, 0.6);

        let reports = run_all(
            &MemorySource::new(book),
            &MemorySource::new(finds),
            &mut NullSink,
        )
        .unwrap();

        let count_of = |s: Strategy| reports.iter().find(|r| r.strategy == s).unwrap().found;

        // Exact-match strategies always agree; the substring scan can
        // only ever find more.
        let exact = count_of(Strategy::QuickBinary);
        assert_eq!(count_of(Strategy::BubbleJump), exact);
        assert_eq!(count_of(Strategy::HashTable), exact);
        assert!(count_of(Strategy::Linear) >= exact);
    }
}
