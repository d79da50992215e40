//! The repository capability.

use bytes::Bytes;
use std::sync::Arc;

use crate::Result;

/// Read-only view of a git repository.
///
/// Implementations must be safe to call from several request threads at
/// once; none of the operations mutate repository state.
pub trait Repository: Send + Sync {
    /// Resolves a revision name to its abbreviated commit hash.
    fn resolve(&self, revision: &str) -> Result<String>;

    /// Lists configured remote names in the order git reports them.
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Returns the contents of `path` as it existed at `revision`.
    fn show_file_at(&self, revision: &str, path: &str) -> Result<Bytes>;

    /// Resolves `HEAD`.
    fn current_head(&self) -> Result<String> {
        self.resolve("HEAD")
    }
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn resolve(&self, revision: &str) -> Result<String> {
        (**self).resolve(revision)
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        (**self).list_remotes()
    }

    fn show_file_at(&self, revision: &str, path: &str) -> Result<Bytes> {
        (**self).show_file_at(revision, path)
    }

    fn current_head(&self) -> Result<String> {
        (**self).current_head()
    }
}
