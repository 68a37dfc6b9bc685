use std::{
    ffi::{OsStr, OsString},
    fs,
    path::Path,
    process::{Command, Stdio},
};

use chrono::{DateTime, FixedOffset};

use super::{CommitId, Error, Result, Vcs};

/// Drives the command-line `git` executable found on the host system.
#[derive(Clone, Debug)]
pub struct Git {
    program: OsString,
    envs: Vec<(OsString, OsString)>,
}

impl Default for Git {
    fn default() -> Git {
        Git::new("git")
    }
}

impl Git {
    /// Use `program` as the git executable.
    pub fn new<S: Into<OsString>>(program: S) -> Git {
        Git {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every git process spawned.
    pub fn env<K, V>(mut self, key: K, value: V) -> Git
    where
        K: Into<OsString>,
        V: Into<OsString>,
    {
        self.envs.push((key.into(), value.into()));
        self
    }

    // Run git in `work_dir` and return its stdout. A non-zero exit status
    // becomes `Error::CommandFailed` carrying git's stderr.
    fn run<I, S>(
        &self,
        operation: &'static str,
        work_dir: &Path,
        args: I,
        extra_envs: &[(&str, &str)],
    ) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command
            .current_dir(work_dir)
            .args(args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .envs(extra_envs.iter().copied())
            .stdin(Stdio::null());

        log::debug!(target: "git", "{:?} in {}", command, work_dir.display());

        let output = command.output()?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                operation,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Vcs for Git {
    fn init(&self, work_dir: &Path) -> Result<()> {
        self.run("init", work_dir, &["init"], &[])?;
        Ok(())
    }

    fn list_commits(&self, work_dir: &Path) -> Result<Vec<CommitId>> {
        let stdout = self.run(
            "log",
            work_dir,
            &["log", "--reverse", "--pretty=format:%H"],
            &[],
        )?;

        Ok(String::from_utf8_lossy(&stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(CommitId::new)
            .collect())
    }

    fn format_patch(&self, work_dir: &Path, commit: &CommitId) -> Result<Vec<u8>> {
        self.run(
            "format-patch",
            work_dir,
            &["format-patch", "-1", "-k", "--stdout", commit.as_str()],
            &[],
        )
    }

    fn apply_patch(&self, work_dir: &Path, patch_path: &Path) -> Result<()> {
        // git runs inside `work_dir`, so a relative path would resolve twice.
        let patch_path = fs::canonicalize(patch_path)?;

        let args: [&OsStr; 3] = [
            OsStr::new("am"),
            OsStr::new("-k"),
            patch_path.as_os_str(),
        ];
        self.run("am", work_dir, &args, &[])?;
        Ok(())
    }

    fn amend_date(&self, work_dir: &Path, date: &DateTime<FixedOffset>) -> Result<()> {
        let date = internal_date(date);
        let date_arg = format!("--date={}", date);

        self.run(
            "commit --amend",
            work_dir,
            &["commit", "--amend", "--no-edit", "--no-verify", date_arg.as_str()],
            &[("GIT_COMMITTER_DATE", date.as_str())],
        )?;

        Ok(())
    }
}

// Git's own `<unix-seconds> <+hhmm>` date format. Sub-second precision is
// dropped since git stores whole seconds.
fn internal_date(date: &DateTime<FixedOffset>) -> String {
    format!("{} {}", date.timestamp(), date.format("%z"))
}
