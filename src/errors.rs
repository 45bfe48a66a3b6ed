//! Error type for the benchmark harness.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a benchmark run.
///
/// A missing input source is the only fatal startup condition; everything
/// else in the core (malformed lines, targets that are not found) degrades
/// gracefully and never surfaces here.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("input source '{path}' is unavailable")]
    InputUnavailable { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
}
