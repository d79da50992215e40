//! Request shape validation.
//!
//! The reference taken from the URL path ends up as an argument to `git`,
//! so it is held to a narrow grammar before anything else looks at it.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use qwerty_web::Request;

/// Characters allowed in a reference.
pub static REF_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]*$").expect("Invalid regex"));

/// Longest reference accepted.
pub const MAX_REF_LENGTH: usize = 40;

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Only `GET` is served.
    #[error("method '{0}' not allowed")]
    Method(String),

    /// Query parameters are not supported.
    #[error("query string not supported")]
    Query,

    /// Reference is too long.
    #[error("reference is {0} characters, limit is {max}", max = MAX_REF_LENGTH)]
    TooLong(usize),

    /// Reference contains a disallowed character.
    #[error("reference contains characters outside [A-Za-z0-9._-]")]
    Pattern,
}

/// Removes leading `/` separators.
pub fn strip_separators(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Checks the request, reporting the first rule it breaks.
pub fn validate(request: &Request) -> Result<(), Rejection> {
    if request.method != "GET" {
        return Err(Rejection::Method(request.method.clone()));
    }

    if !request.query.is_empty() {
        return Err(Rejection::Query);
    }

    let reference = strip_separators(&request.path);
    if reference.is_empty() {
        return Ok(());
    }

    if reference.len() > MAX_REF_LENGTH {
        return Err(Rejection::TooLong(reference.len()));
    }

    if !REF_PATH_REGEX.is_match(reference) {
        return Err(Rejection::Pattern);
    }

    Ok(())
}

/// Whether the request may be served.
pub fn is_valid(request: &Request) -> bool {
    validate(request).is_ok()
}
