//! Git error types.

use thiserror::Error;

/// Errors that can occur while talking to a repository.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable could not be found.
    #[error("git is not installed or not on PATH")]
    NotInstalled,

    /// A git command exited unsuccessfully.
    #[error("`{command}` failed{}: {stderr}", exit_suffix(.exit_code))]
    Command {
        /// The command line that was run.
        command: String,
        /// Trimmed standard error output.
        stderr: String,
        /// Exit code, if the process was not killed by a signal.
        exit_code: Option<i32>,
    },

    /// Revision does not resolve.
    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    /// File does not exist at the given revision.
    #[error("path '{path}' does not exist in '{revision}'")]
    FileNotFound {
        /// Revision that was searched.
        revision: String,
        /// Path within the tree.
        path: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" (exit code {c})")).unwrap_or_default()
}
