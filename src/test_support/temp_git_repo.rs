use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use crate::git::CommitId;

/// A `TempGitRepo` creates a temporary, empty repo using
/// the command-line git from the host system. It is used in
/// unit tests as a source of commits to replay and to inspect
/// the histories that replays produce.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub struct TempGitRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TempGitRepo {
    // Create a new repo in a temporary directory.
    // This directory will be deleted when the struct is dropped.
    pub fn new() -> TempGitRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path: PathBuf = tempdir.path().to_path_buf();

        let mut r = TempGitRepo { tempdir, path };

        r.git_command(&["init"])
            .git_command(&["config", "user.name", "A U Thor"])
            .git_command(&["config", "user.email", "author@example.com"])
            .git_command(&["config", "commit.gpgsign", "false"]);
        r
    }

    // Return the path for this repo's root (working directory).
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    // Create a command struct pointing to the root of the repo.
    pub fn command<S: AsRef<OsStr>>(&self, program: S) -> Command {
        let mut c = Command::new(program);
        c.current_dir(&self.path);
        c
    }

    // Run a git command and return the git repo struct for method chaining.
    // Since this is used primarily for testing purposes, panics if command fails.
    pub fn git_command<I, S>(&mut self, args: I) -> &mut TempGitRepo
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.git_output(args);
        self
    }

    // Run a git command and return its stdout.
    pub fn git_output<I, S>(&self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.command("git").args(args).output().unwrap();

        if !output.status.success() {
            panic!(
                "git command failed with status {:?}\n\nstdout:\n\n{}\n\nstderr:\n\n{}\n\n",
                output.status.code(),
                std::str::from_utf8(&output.stdout).unwrap(),
                std::str::from_utf8(&output.stderr).unwrap()
            );
        }

        String::from_utf8(output.stdout).unwrap()
    }

    // Write `content` to `name` and commit it with `message`.
    pub fn commit_file(&mut self, name: &str, content: &str, message: &str) -> &mut TempGitRepo {
        fs::write(self.path.join(name), content).unwrap();
        self.git_command(&["add", name])
            .git_command(&["commit", "-q", "-m", message])
    }

    // All commit IDs reachable from HEAD, oldest first.
    pub fn commit_ids(&self) -> Vec<CommitId> {
        self.git_output(&["rev-list", "--reverse", "HEAD"])
            .lines()
            .map(CommitId::new)
            .collect()
    }

    // The subject line of the given commit.
    pub fn subject(&self, commit: &CommitId) -> String {
        self.git_output(&["log", "-1", "--format=%s", commit.as_str()])
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::TempGitRepo;

    #[test]
    fn temp_path() {
        let path = {
            let mut r = TempGitRepo::new();
            r.git_command(&["status"]);

            let path = r.path().to_path_buf();

            let git_dir = path.join(".git");
            assert_eq!(git_dir.is_dir(), true);

            path
        };

        assert_eq!(path.as_path().is_dir(), false);
    }

    #[test]
    fn commits_are_listed_in_order() {
        let mut r = TempGitRepo::new();
        r.commit_file("one", "1\n", "one")
            .commit_file("two", "2\n", "two");

        let ids = r.commit_ids();
        assert_eq!(ids.len(), 2);
        assert_eq!(r.subject(&ids[0]), "one");
        assert_eq!(r.subject(&ids[1]), "two");
    }

    #[test]
    #[should_panic(expected = "git command failed with status")]
    fn git_command_error() {
        let mut r = TempGitRepo::new();
        r.git_command(&["bogus"]);
    }
}
