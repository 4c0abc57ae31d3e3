//! Errors raised while generating or checking a case.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single case. The driver stops the run on the first one.
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("input file {path} is missing or unreadable (was it generated?): {source}")]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input file {path} does not start with an integer: {content:?}")]
    ParseFailure { path: PathBuf, content: String },
}

impl CaseError {
    /// The file the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CaseError::FileNotFound { path, .. }
            | CaseError::FileWriteFailure { path, .. }
            | CaseError::ParseFailure { path, .. } => path,
        }
    }
}
