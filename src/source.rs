//! Input collaborators.
//!
//! The core only ever asks for "an ordered sequence of lines, fully
//! materialized"; where those lines come from is the collaborator's
//! business. Strategies re-read their source on every run so that each
//! one operates on a private, independent copy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::BenchError;

/// Producer of the raw lines of one input (phonebook or query list).
pub trait LineSource {
    /// Human-readable identity of the source, for error reporting.
    fn describe(&self) -> String;

    /// Check the source can be read at all. Called once at startup so a
    /// missing input aborts the run before any strategy executes.
    fn ensure_available(&self) -> Result<(), BenchError>;

    /// Materialize the full line sequence, in source order.
    fn lines(&self) -> Result<Vec<String>, BenchError>;
}

/// A line source backed by a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn ensure_available(&self) -> Result<(), BenchError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(BenchError::InputUnavailable {
                path: self.path.clone(),
            })
        }
    }

    fn lines(&self) -> Result<Vec<String>, BenchError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// An in-memory line source, used by tests and benches.
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }

    fn ensure_available(&self) -> Result<(), BenchError> {
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>, BenchError> {
        Ok(self.lines.clone())
    }
}
