//! Repository backed by the `git` executable.

use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{GitError, Repository, Result};

/// A [`Repository`] that shells out to `git` inside a working tree.
///
/// Every call is a blocking subprocess with no timeout.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    /// Creates a backend rooted at the given working tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The working tree this backend runs in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the output of `git --version`.
    pub fn version(&self) -> Result<String> {
        let stdout = self.git(&["--version"])?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_owned())
    }

    /// Verifies that git is installed and that `HEAD` resolves.
    ///
    /// Returns the short hash of `HEAD` on success.
    pub fn flight_check(&self) -> Result<String> {
        let version = self.version()?;
        let head = self.current_head()?;
        tracing::info!(%version, %head, root = %self.root.display(), "Flight check passed");
        Ok(head)
    }

    /// Runs git with `args` and returns raw stdout.
    fn git(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GitError::NotInstalled,
                _ => GitError::Io(e),
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(GitError::Command {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
                exit_code: output.status.code(),
            })
        }
    }

    /// Runs git and returns trimmed stdout as text.
    fn git_text(&self, args: &[&str]) -> Result<String> {
        let stdout = self.git(args)?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_owned())
    }
}

impl Repository for GitCli {
    fn resolve(&self, revision: &str) -> Result<String> {
        let spec = format!("{revision}^{{commit}}");
        let hash = self.git_text(&[
            "rev-parse",
            "--quiet",
            "--verify",
            "--short",
            "--end-of-options",
            &spec,
        ])?;
        if hash.is_empty() {
            return Err(GitError::UnknownRevision(revision.to_owned()));
        }
        Ok(hash)
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        let stdout = self.git_text(&["remote"])?;
        Ok(parse_remotes(&stdout))
    }

    fn show_file_at(&self, revision: &str, path: &str) -> Result<Bytes> {
        let object = format!("{revision}:{path}");
        let stdout = self.git(&["cat-file", "blob", &object])?;
        Ok(Bytes::from(stdout))
    }
}

/// Parses `git remote` output, one name per line.
fn parse_remotes(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Stdio;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {args:?} failed");
    }

    fn init_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let path = dir.path();
        run(path, &["init", "-q", "-b", "main"]);
        run(path, &["config", "user.email", "test@example.com"]);
        run(path, &["config", "user.name", "Test User"]);
        run(path, &["config", "commit.gpgsign", "false"]);
        fs::write(path.join("qwerty.sh"), "echo one\n").unwrap();
        run(path, &["add", "qwerty.sh"]);
        run(path, &["commit", "-q", "-m", "one"]);
        dir
    }

    #[test]
    fn test_parse_remotes() {
        assert_eq!(
            parse_remotes("origin\nupstream\n\n"),
            vec!["origin".to_string(), "upstream".to_string()]
        );
        assert!(parse_remotes("").is_empty());
    }

    #[test]
    fn test_resolve_and_show() {
        if !git_available() {
            println!("SKIP: git not installed");
            return;
        }
        let dir = init_repo();
        let git = GitCli::new(dir.path());

        let head = git.current_head().unwrap();
        assert!(!head.is_empty());
        assert_eq!(git.resolve("main").unwrap(), head);
        assert_eq!(git.flight_check().unwrap(), head);

        let content = git.show_file_at(&head, "qwerty.sh").unwrap();
        assert_eq!(&content[..], b"echo one\n");
    }

    #[test]
    fn test_unknown_revision_fails() {
        if !git_available() {
            println!("SKIP: git not installed");
            return;
        }
        let dir = init_repo();
        let git = GitCli::new(dir.path());

        assert!(git.resolve("deadbee").is_err());
        assert!(git.resolve("--all").is_err());
        assert!(git.list_remotes().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_fails() {
        if !git_available() {
            println!("SKIP: git not installed");
            return;
        }
        let dir = init_repo();
        let git = GitCli::new(dir.path());
        let head = git.current_head().unwrap();

        let err = git.show_file_at(&head, "missing.sh").unwrap_err();
        assert!(matches!(err, GitError::Command { .. }));
    }

    #[test]
    fn test_flight_check_outside_repository() {
        if !git_available() {
            println!("SKIP: git not installed");
            return;
        }
        let dir = TempDir::new().unwrap();
        let git = GitCli::new(dir.path());
        assert!(git.flight_check().is_err());
    }
}
