//! Sorting algorithms for phonebook records.
//!
//! Both sorters order ascending by record name and report the wall-clock
//! time of the sort step alone. They operate on an owned, in-memory copy;
//! the on-disk source is never touched.

mod bubble;
mod quick;

pub use bubble::bubble_sort;
pub use quick::quick_sort;

use std::time::Duration;

use crate::record::Record;

/// Signature shared by both sorters, so the harness can treat the sort
/// step as an interchangeable phase.
pub type SortFn = fn(Vec<Record>) -> (Vec<Record>, Duration);
