//! Job-related data structures.
//!
//! A `JobDescriptor` correlates one input option, one output option and one
//! mode option that were supplied in the same relative position on the
//! command line. Every field is required; incomplete batches are rejected
//! during combination instead of surfacing as missing keys at run time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::enums::Mode;

/// Resolved input side of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// The path as given on the command line (file or directory).
    pub given: PathBuf,
    /// The files to process. A directory input resolves to every `.mkv`
    /// file found inside it; a file input resolves to itself.
    pub resolved: Vec<PathBuf>,
}

impl InputSpec {
    pub fn new(given: impl Into<PathBuf>, resolved: Vec<PathBuf>) -> Self {
        Self {
            given: given.into(),
            resolved,
        }
    }

    /// An input that is a single file.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            given: path.clone(),
            resolved: vec![path],
        }
    }
}

/// Resolved output side of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// The path as given on the command line.
    pub given: PathBuf,
    /// The destination file or directory.
    pub resolved: PathBuf,
}

impl OutputSpec {
    pub fn new(given: impl Into<PathBuf>, resolved: impl Into<PathBuf>) -> Self {
        Self {
            given: given.into(),
            resolved: resolved.into(),
        }
    }
}

/// One fully-populated job, ready for the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Correlation key: the option occurrence index on the command line.
    pub batch: usize,
    pub mode: Mode,
    pub input: InputSpec,
    pub output: OutputSpec,
}
