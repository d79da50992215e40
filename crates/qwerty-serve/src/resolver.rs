//! Reference resolution.
//!
//! A reference is tried against the local namespace first, then as
//! `<remote>/<reference>` for each remote in the order git lists them. The
//! first hit wins, so a short name that exists on several remotes resolves
//! the same way every time.

use std::fmt;

use qwerty_git::Repository;

use crate::reference::{Reference, DIRTY};

/// A reference pinned to something that can be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRevision {
    /// Abbreviated commit hash.
    Commit(String),
    /// The working tree.
    Dirty,
}

impl ResolvedRevision {
    /// Revision as passed to git.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Commit(hash) => hash,
            Self::Dirty => DIRTY,
        }
    }
}

impl fmt::Display for ResolvedRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves `reference`, or returns `None` if nothing matches.
///
/// Git failures are never returned; they count as a miss.
pub fn resolve<R>(repository: &R, reference: &Reference) -> Option<ResolvedRevision>
where
    R: Repository + ?Sized,
{
    let name = match reference {
        Reference::Dirty => return Some(ResolvedRevision::Dirty),
        Reference::Symbolic(name) => name,
    };

    match repository.resolve(name) {
        Ok(hash) => return Some(ResolvedRevision::Commit(hash)),
        Err(e) => tracing::debug!(reference = %name, error = %e, "Local lookup missed"),
    }

    let remotes = match repository.list_remotes() {
        Ok(remotes) => remotes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list remotes");
            return None;
        }
    };

    for remote in remotes {
        let qualified = format!("{remote}/{name}");
        match repository.resolve(&qualified) {
            Ok(hash) => return Some(ResolvedRevision::Commit(hash)),
            Err(e) => tracing::debug!(reference = %qualified, error = %e, "Remote lookup missed"),
        }
    }

    None
}
