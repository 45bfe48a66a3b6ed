//! Hash index over the phonebook: name -> number.

use std::collections::HashMap;
use std::time::Duration;

use crate::record::Record;
use crate::utils::timed;

/// Mapping from a person's name to their number. Keys are unique; when
/// the source contains duplicate names, the later line wins.
pub type HashIndex = HashMap<String, i64>;

/// Build the index from raw phonebook lines, timing only the build step.
/// Inserting in file order gives last-write-wins for duplicate names.
pub fn build_index(lines: &[String]) -> (HashIndex, Duration) {
    timed(|| {
        let mut index = HashIndex::with_capacity(lines.len());
        for line in lines {
            let record = Record::parse(line);
            index.insert(record.name, record.number);
        }
        index
    })
}

/// Count the targets present as keys (exact match, presence check only),
/// timing the lookup loop.
pub fn count_keys(targets: &[String], index: &HashIndex) -> (usize, Duration) {
    timed(|| {
        targets
            .iter()
            .filter(|target| index.contains_key(target.as_str()))
            .count()
    })
}
