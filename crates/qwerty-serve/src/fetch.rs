//! Content retrieval.

use bytes::Bytes;
use std::path::{Path, PathBuf};
use thiserror::Error;

use qwerty_git::{GitError, Repository};

use crate::resolver::ResolvedRevision;

/// The one file this service serves.
pub const TARGET_FILE: &str = "qwerty.sh";

/// Errors reading content for an already-resolved revision.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The working-tree copy could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Git could not produce the file.
    #[error(transparent)]
    Git(#[from] GitError),
}

/// Returns `filename` as it is at `revision`.
///
/// For [`ResolvedRevision::Dirty`] the target file is read from
/// `dirty_path` on disk instead of from history.
pub fn fetch<R>(
    repository: &R,
    revision: &ResolvedRevision,
    filename: &str,
    dirty_path: &Path,
) -> Result<Bytes, FetchError>
where
    R: Repository + ?Sized,
{
    if *revision == ResolvedRevision::Dirty && filename == TARGET_FILE {
        let content = std::fs::read(dirty_path).map_err(|source| FetchError::Read {
            path: dirty_path.to_path_buf(),
            source,
        })?;
        return Ok(Bytes::from(content));
    }

    Ok(repository.show_file_at(revision.as_str(), filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qwerty_git::MemoryRepository;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_commit() {
        let repo = MemoryRepository::new().with_file("abc1234", TARGET_FILE, "echo v1\n");
        let revision = ResolvedRevision::Commit("abc1234".into());

        let content = fetch(&repo, &revision, TARGET_FILE, Path::new("unused")).unwrap();
        assert_eq!(content, Bytes::from_static(b"echo v1\n"));
    }

    #[test]
    fn test_fetch_dirty_reads_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TARGET_FILE);
        std::fs::write(&path, "echo uncommitted\n").unwrap();
        let repo = MemoryRepository::new().with_file("DIRTY", TARGET_FILE, "echo wrong\n");

        let content = fetch(&repo, &ResolvedRevision::Dirty, TARGET_FILE, &path).unwrap();
        assert_eq!(content, Bytes::from_static(b"echo uncommitted\n"));
    }

    #[test]
    fn test_fetch_dirty_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.sh");

        let err = fetch(&MemoryRepository::new(), &ResolvedRevision::Dirty, TARGET_FILE, &path)
            .unwrap_err();
        assert!(matches!(err, FetchError::Read { .. }));
    }

    #[test]
    fn test_fetch_missing_at_revision() {
        let revision = ResolvedRevision::Commit("abc1234".into());
        let err = fetch(&MemoryRepository::new(), &revision, TARGET_FILE, Path::new("unused"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Git(GitError::FileNotFound { .. })));
    }
}
