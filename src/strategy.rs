//! The four benchmarked strategies.
//!
//! A strategy is one complete prepare + search combination. The set is
//! closed, so a plain enum carries the dispatch; the harness selects the
//! algorithms by matching on the variant.

use std::fmt;

/// One sort/index + search combination, benchmarked end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Unsorted substring scan over the raw lines.
    Linear,
    /// Bubble sort, then jump search.
    BubbleJump,
    /// Quicksort, then binary search.
    QuickBinary,
    /// Name -> number hash table, then key lookups.
    HashTable,
}

impl Strategy {
    /// All strategies, in the fixed benchmark order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::BubbleJump,
        Strategy::QuickBinary,
        Strategy::HashTable,
    ];

    /// Label used in the console notices, e.g. `bubble sort + jump search`.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear search",
            Strategy::BubbleJump => "bubble sort + jump search",
            Strategy::QuickBinary => "quick sort + binary search",
            Strategy::HashTable => "hash table",
        }
    }

    /// Short identifier for CLI selection.
    pub fn id(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::BubbleJump => "bubble-jump",
            Strategy::QuickBinary => "quick-binary",
            Strategy::HashTable => "hash",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Linear => "Substring scan over unsorted lines",
            Strategy::BubbleJump => "Bubble sort the book, jump search by exact name",
            Strategy::QuickBinary => "Quicksort the book, binary search by exact name",
            Strategy::HashTable => "Build a name->number table, look keys up",
        }
    }

    /// Label for the prepare phase in reports (`None` for the linear
    /// strategy, which has no prepare phase).
    pub fn prepare_label(&self) -> Option<&'static str> {
        match self {
            Strategy::Linear => None,
            Strategy::BubbleJump | Strategy::QuickBinary => Some("Sorting"),
            Strategy::HashTable => Some("Creating"),
        }
    }

    /// Find a strategy by its CLI identifier.
    pub fn find(id: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
