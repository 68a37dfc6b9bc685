use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

// Run a git command in `dir` and return its stdout.
// Since this is used for testing purposes, panics if the command fails.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap();

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

// One value per commit, oldest first, using a `git log` format string.
pub fn log(dir: &Path, format: &str) -> Vec<String> {
    git(dir, &["log", "--reverse", &format!("--format={}", format)])
        .lines()
        .map(|l| l.to_string())
        .collect()
}

// A temporary source repository. Each `(file, content, message)` becomes one
// commit, in order.
pub struct SourceRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

impl SourceRepo {
    pub fn new(commits: &[(&str, &str, &str)]) -> SourceRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("source");
        fs::create_dir_all(&path).unwrap();

        git(&path, &["init", "-q"]);
        git(&path, &["config", "user.name", "A U Thor"]);
        git(&path, &["config", "user.email", "author@example.com"]);
        git(&path, &["config", "commit.gpgsign", "false"]);

        for (file, content, message) in commits {
            fs::write(path.join(file), content).unwrap();
            git(&path, &["add", file]);
            git(&path, &["commit", "-q", "-m", message]);
        }

        SourceRepo { tempdir, path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

// The redate binary, with a committer identity and a fixed time zone so that
// results don't depend on the host.
pub fn redate() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("redate").unwrap();
    cmd.env("GIT_COMMITTER_NAME", "C O Mitter")
        .env("GIT_COMMITTER_EMAIL", "committer@example.com")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("TZ", "UTC")
        .env_remove("RUST_LOG");
    cmd
}
