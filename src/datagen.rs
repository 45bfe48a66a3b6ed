//! Synthetic phonebook and query data.
//!
//! The reference tool ran against fixed asset files; for reproducible
//! benchmarking this module generates equivalent data on demand. Seeded
//! generation keeps runs comparable.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Daniel", "Erin", "Frank", "Gina", "Henry", "Irene", "Jack",
    "Karen", "Liam", "Mona", "Nate", "Olga", "Peter", "Quinn", "Rosa", "Sam", "Tina",
    "Ulrich", "Vera", "Walter", "Xenia", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Brown", "Clark", "Dale", "Engel", "Field", "Gray", "Hill", "Ito", "Jones",
    "Klein", "Lee", "Moore", "Nash", "Olsen", "Price", "Quist", "Reyes", "Smith", "Tran",
    "Unger", "Vance", "White", "Xu", "Young", "Zimmer",
];

/// Deterministic generator for phonebook lines and query lists.
pub struct DataGen {
    rng: StdRng,
}

impl DataGen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).unwrap();
        let last = LAST_NAMES.choose(&mut self.rng).unwrap();
        format!("{first} {last}")
    }

    /// Generate `entries` phonebook lines in the `<number> <name>` format.
    /// Duplicate names are possible, as in real directories.
    pub fn phonebook(&mut self, entries: usize) -> Vec<String> {
        (0..entries)
            .map(|_| {
                let number: i64 = self.rng.random_range(100_000..10_000_000);
                format!("{} {}", number, self.name())
            })
            .collect()
    }

    /// Generate `queries` target names. Roughly `hit_rate` of them are
    /// drawn from the phonebook; the rest carry a suffix that no
    /// generated name contains, so they miss under every strategy.
    pub fn queries(&mut self, phonebook: &[String], queries: usize, hit_rate: f64) -> Vec<String> {
        let names: Vec<String> = phonebook
            .iter()
            .map(|line| crate::record::Record::parse(line).name)
            .collect();

        (0..queries)
            .map(|i| {
                let hit = !names.is_empty() && self.rng.random_bool(hit_rate.clamp(0.0, 1.0));
                if hit {
                    names.choose(&mut self.rng).unwrap().clone()
                } else {
                    format!("{} Nowhere{}", self.name(), i)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = DataGen::new(7).phonebook(50);
        let b = DataGen::new(7).phonebook(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_lines_parse_cleanly() {
        let book = DataGen::new(1).phonebook(100);
        for line in &book {
            let record = Record::parse(line);
            assert!(record.number >= 100_000);
            assert!(!record.name.is_empty());
        }
    }

    #[test]
    fn test_miss_queries_never_match() {
        let mut gen = DataGen::new(3);
        let book = gen.phonebook(20);
        let misses = gen.queries(&book, 10, 0.0);
        for target in &misses {
            assert!(!book.iter().any(|line| line.contains(target)));
        }
    }

    #[test]
    fn test_all_hit_queries_come_from_the_book() {
        let mut gen = DataGen::new(9);
        let book = gen.phonebook(20);
        let hits = gen.queries(&book, 10, 1.0);
        let names: Vec<String> = book.iter().map(|l| Record::parse(l).name).collect();
        for target in &hits {
            assert!(names.contains(target));
        }
    }
}
