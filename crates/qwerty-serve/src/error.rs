//! Error types for the content resolver.

use axum::http::StatusCode;
use qwerty_git::GitError;
use qwerty_web::{Response, ShellScript};
use thiserror::Error;

use crate::fetch::FetchError;
use crate::validation::Rejection;

/// Exit code for a rejected request.
pub const BAD_REQUEST_EXIT: u8 = 40;
/// Exit code for an unknown revision.
pub const NOT_FOUND_EXIT: u8 = 44;
/// Exit code for a server-side failure.
pub const INTERNAL_ERROR_EXIT: u8 = 50;

/// Ways serving a request can fail.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Request shape is not allowed.
    #[error("bad request: {0}")]
    BadRequest(#[from] Rejection),

    /// Reference resolves nowhere.
    #[error("revision '{0}' not found")]
    NotFound(String),

    /// Content could not be read for a resolved revision.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl ServeError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServeError::NotFound(_) => StatusCode::NOT_FOUND,
            ServeError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shell script body for this error.
    pub fn script(&self) -> ShellScript {
        match self {
            ServeError::BadRequest(_) => ShellScript::error("bad request", BAD_REQUEST_EXIT),
            ServeError::NotFound(_) => ShellScript::error(self, NOT_FOUND_EXIT),
            ServeError::Fetch(_) => {
                ShellScript::error("internal server error", INTERNAL_ERROR_EXIT)
            }
        }
    }

    /// Whether the client is at fault.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Builds the error response.
    pub fn to_response(&self) -> Response {
        Response::shell(self.status(), &self.script())
    }
}

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// git is not on PATH.
    #[error("git is required but was not found")]
    GitMissing,

    /// The repository has no usable HEAD.
    #[error("HEAD does not resolve in {root}")]
    HeadUnresolvable {
        /// Working tree that was checked.
        root: String,
        /// Underlying git failure.
        source: GitError,
    },
}
