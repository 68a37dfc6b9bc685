//! The version-control tool that histories are copied with.
//!
//! ## Design Goals
//!
//! Replaying a history needs only five primitive operations from the
//! underlying tool. They are gathered in the `Vcs` trait so the replay logic
//! never depends on any particular command syntax. `Git` implements them by
//! spawning the command-line `git` executable.

use std::{fmt, path::Path};

use chrono::{DateTime, FixedOffset};

mod command;
pub use command::Git;

mod error;
pub use error::{Error, Result};

/// Names a single commit in a source repository.
///
/// The value is opaque; only its position in the list returned by
/// `Vcs::list_commits` carries meaning.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CommitId(String);

impl CommitId {
    pub fn new<S: Into<String>>(id: S) -> CommitId {
        CommitId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A struct that implements the `Vcs` trait can create, read and extend
/// repositories on the local file system.
///
/// Every operation is synchronous: it returns only once the underlying tool
/// has finished.
pub trait Vcs {
    /// Creates a new, empty repository in the existing directory `work_dir`.
    fn init(&self, work_dir: &Path) -> Result<()>;

    /// Lists the commits reachable from the current tip, oldest first.
    ///
    /// An empty history yields an empty list or an error, depending on the tool.
    fn list_commits(&self, work_dir: &Path) -> Result<Vec<CommitId>>;

    /// Exports a single commit (metadata and changes) as a patch document.
    fn format_patch(&self, work_dir: &Path, commit: &CommitId) -> Result<Vec<u8>>;

    /// Applies the patch stored at `patch_path`, creating a new commit on top
    /// of the current tip with the author and message recorded in the patch.
    fn apply_patch(&self, work_dir: &Path, patch_path: &Path) -> Result<()>;

    /// Rewrites the timestamp of the most recent commit in place, keeping its
    /// tree, message and author.
    fn amend_date(&self, work_dir: &Path, date: &DateTime<FixedOffset>) -> Result<()>;
}
