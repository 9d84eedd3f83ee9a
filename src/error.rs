//! Error types for branch collection and presentation

use std::io;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures that abort a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path is not inside a git repository
    #[error("not a git repository (or any of the parent directories)")]
    RepositoryNotFound,

    /// Any other failure reported by `libgit2`, carrying its message
    #[error("{0}")]
    Repository(String),

    /// Writing the table to the output stream failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Self::Repository(err.message().to_string())
    }
}
