// Items in this module (and submodules) are only used in test code,
// so we disable the unused_imports warning.

mod temp_git_repo;

#[allow(unused_imports)]
pub(crate) use temp_git_repo::TempGitRepo;

use crate::git::Git;

// A `Git` that can commit in freshly initialized repos regardless of the
// host's global git configuration.
#[allow(dead_code)]
pub(crate) fn git() -> Git {
    Git::default()
        .env("GIT_COMMITTER_NAME", "C O Mitter")
        .env("GIT_COMMITTER_EMAIL", "committer@example.com")
        .env("GIT_CONFIG_NOSYSTEM", "1")
}
