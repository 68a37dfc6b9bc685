use std::{fs, io, path::Path};

use crate::git::{Result, Vcs};

/// Makes `target` a new, empty repository.
///
/// Anything already at `target`, file or directory, is removed first without
/// confirmation.
pub fn initialize<V: Vcs>(vcs: &V, target: &Path) -> Result<()> {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.is_dir() => {
            log::debug!("removing existing directory {}", target.display());
            fs::remove_dir_all(target)?;
        }
        Ok(_) => {
            log::debug!("removing existing file {}", target.display());
            fs::remove_file(target)?;
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    fs::create_dir_all(target)?;
    vcs.init(target)
}
