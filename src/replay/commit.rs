use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Offset, TimeZone};

use crate::git::{self, CommitId, Vcs};
use crate::{Error, Result};

/// Name of the scratch file, inside the target repository, that each
/// commit's patch is written to before it is applied.
pub const PATCH_FILE_NAME: &str = "commit.patch";

/// Replays a single commit from `source` on top of `target`, then rewrites
/// the new commit's timestamp to `date`.
///
/// The new commit keeps the content, author and message of the source commit.
/// On failure, whatever was already replayed stays in place; the scratch
/// patch file never does.
pub fn replay<V, Tz>(
    vcs: &V,
    source: &Path,
    target: &Path,
    commit: &CommitId,
    date: &DateTime<Tz>,
) -> Result<()>
where
    V: Vcs,
    Tz: TimeZone,
{
    replay_inner(vcs, source, target, commit, date).map_err(|source| Error::Replay {
        commit: commit.clone(),
        source,
    })
}

fn replay_inner<V, Tz>(
    vcs: &V,
    source: &Path,
    target: &Path,
    commit: &CommitId,
    date: &DateTime<Tz>,
) -> git::Result<()>
where
    V: Vcs,
    Tz: TimeZone,
{
    let patch = vcs.format_patch(source, commit)?;

    let scratch = ScratchPatch::create(target, &patch)?;
    vcs.apply_patch(target, scratch.path())?;

    let date = date.with_timezone(&date.offset().fix());
    vcs.amend_date(target, &date)?;

    log::debug!("replayed {} at {}", commit, date.to_rfc3339());
    Ok(())
}

/// A patch file written to a fixed location in the target repository.
///
/// The file is removed when the struct is dropped, whether or not the patch
/// was applied successfully. Any stale copy left at that location is removed
/// before a new one is written.
pub struct ScratchPatch {
    path: PathBuf,
}

impl ScratchPatch {
    pub fn create(target: &Path, patch: &[u8]) -> io::Result<ScratchPatch> {
        let path = target.join(PATCH_FILE_NAME);
        remove_if_present(&path)?;

        let scratch = ScratchPatch { path };
        fs::write(&scratch.path, patch)?;

        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl Drop for ScratchPatch {
    fn drop(&mut self) {
        log::trace!("removing {}", self.path.display());

        if let Err(err) = remove_if_present(&self.path) {
            log::warn!("could not remove {}: {}", self.path.display(), err);
        }
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        r => r,
    }
}
