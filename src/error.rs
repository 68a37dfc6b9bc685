use std::path::PathBuf;

use thiserror::Error;

use crate::git::CommitId;
use crate::{config, dates, git};

/// Describes everything that can abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("failed to generate dates: {0}")]
    Dates(#[from] dates::Error),

    #[error("failed to initialize target repository {}: {source}", path.display())]
    Init {
        path: PathBuf,
        #[source]
        source: git::Error,
    },

    #[error("failed to get commits: {0}")]
    History(#[source] git::Error),

    #[error("failed to apply commit {commit}: {source}")]
    Replay {
        commit: CommitId,
        #[source]
        source: git::Error,
    },
}

/// A specialized `Result` type for redate operations.
pub type Result<T> = std::result::Result<T, Error>;
