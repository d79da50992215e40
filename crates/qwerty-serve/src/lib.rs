//! # qwerty.sh content resolver
//!
//! Serves `qwerty.sh` as it exists at the git revision named in the URL
//! path:
//!
//! ```text
//! GET /          -> qwerty.sh at DEFAULT_GIT_REF (HEAD)
//! GET /v0.3      -> qwerty.sh at tag or branch v0.3, local or on a remote
//! GET /c0ffee    -> qwerty.sh at commit c0ffee
//! GET /DIRTY     -> qwerty.sh from the working tree, uncommitted edits included
//! ```
//!
//! Every other outcome is a shell script that writes an error to stderr and
//! exits with a code the client can tell apart:
//!
//! | Outcome | Status | Exit |
//! |---|---|---|
//! | malformed request | 400 | 40 |
//! | unknown revision | 404 | 44 |
//! | server failure | 500 | 50 |
//!
//! ## Modules
//!
//! - [`validation`] - Request shape and reference grammar
//! - [`reference`] - Reading the reference out of the path
//! - [`resolver`] - Local then per-remote revision lookup
//! - [`fetch`] - File content at a revision, or from disk for `DIRTY`
//! - [`handler`] - The pipeline as a [`qwerty_web::Handler`]

pub mod error;
pub mod fetch;
pub mod handler;
pub mod reference;
pub mod resolver;
pub mod settings;
pub mod validation;

pub use error::{ServeError, StartupError};
pub use handler::ContentResolver;
pub use reference::{parse_reference, Reference, DIRTY};
pub use resolver::{resolve, ResolvedRevision};
pub use settings::Settings;
pub use validation::{is_valid, validate, Rejection};
