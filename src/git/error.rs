use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Describes the potential error conditions that might arise from `Vcs` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("git {operation} failed ({status}): {stderr}")]
    CommandFailed {
        operation: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("no commits found in source repository {0}")]
    NoCommits(PathBuf),
}

/// A specialized `Result` type for `Vcs` operations.
pub type Result<T> = std::result::Result<T, Error>;
