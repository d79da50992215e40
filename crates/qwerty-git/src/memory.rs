//! In-memory repository for tests.

use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::{GitError, Repository, Result};

/// A [`Repository`] whose refs, remotes and files live in tables.
///
/// Every `resolve` call is recorded so tests can assert on lookup order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    refs: HashMap<String, String>,
    remotes: Vec<String>,
    files: HashMap<(String, String), Bytes>,
    broken_remotes: bool,
    lookups: RwLock<Vec<String>>,
}

impl MemoryRepository {
    /// Creates an empty repository with no refs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` resolve to `hash`. Remote branches use `remote/branch`.
    pub fn with_ref(mut self, name: &str, hash: &str) -> Self {
        self.refs.insert(name.to_owned(), hash.to_owned());
        self
    }

    /// Appends a remote to the remote list.
    pub fn with_remote(mut self, name: &str) -> Self {
        self.remotes.push(name.to_owned());
        self
    }

    /// Stores `content` as `path` at commit `hash`.
    pub fn with_file(mut self, hash: &str, path: &str, content: impl Into<Bytes>) -> Self {
        self.files
            .insert((hash.to_owned(), path.to_owned()), content.into());
        self
    }

    /// Makes `list_remotes` fail.
    pub fn with_broken_remotes(mut self) -> Self {
        self.broken_remotes = true;
        self
    }

    /// Revision names passed to `resolve`, oldest first.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().clone()
    }
}

impl Repository for MemoryRepository {
    fn resolve(&self, revision: &str) -> Result<String> {
        self.lookups.write().push(revision.to_owned());
        self.refs
            .get(revision)
            .cloned()
            .ok_or_else(|| GitError::UnknownRevision(revision.to_owned()))
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        if self.broken_remotes {
            return Err(GitError::Command {
                command: "git remote".to_owned(),
                stderr: "fatal: not a git repository".to_owned(),
                exit_code: Some(128),
            });
        }
        Ok(self.remotes.clone())
    }

    fn show_file_at(&self, revision: &str, path: &str) -> Result<Bytes> {
        self.files
            .get(&(revision.to_owned(), path.to_owned()))
            .cloned()
            .ok_or_else(|| GitError::FileNotFound {
                revision: revision.to_owned(),
                path: path.to_owned(),
            })
    }
}
