use std::path::Path;

use crate::git::{CommitId, Error, Result, Vcs};

/// Returns the commits of the repository at `source`, oldest first.
///
/// An empty history is an error, not an empty list.
pub fn list_commits<V: Vcs>(vcs: &V, source: &Path) -> Result<Vec<CommitId>> {
    let commits = vcs.list_commits(source)?;

    if commits.is_empty() {
        return Err(Error::NoCommits(source.to_path_buf()));
    }

    log::debug!("found {} commits in {}", commits.len(), source.display());
    Ok(commits)
}
