//! Git access for qwerty.sh.
//!
//! The services never link against git. They talk to a [`Repository`], which
//! answers four questions: what does a revision name resolve to, which remotes
//! exist, what did a file look like at a revision, and where is `HEAD`.
//! [`GitCli`] answers them by running the `git` executable; [`MemoryRepository`]
//! answers them from tables filled in by tests.

mod cli;
mod error;
mod memory;
mod repository;

pub use cli::GitCli;
pub use error::GitError;
pub use memory::MemoryRepository;
pub use repository::Repository;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, GitError>;
