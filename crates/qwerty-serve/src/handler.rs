//! The content resolver handler.

use axum::http::StatusCode;
use std::path::{Path, PathBuf};

use qwerty_git::{GitCli, GitError, Repository};
use qwerty_web::{Handler, Request, Response};

use crate::error::{ServeError, StartupError};
use crate::fetch::{fetch, TARGET_FILE};
use crate::reference::parse_reference;
use crate::resolver::resolve;
use crate::settings::Settings;
use crate::validation::validate;

/// Serves `qwerty.sh` at the revision named by the request path.
#[derive(Debug)]
pub struct ContentResolver<R> {
    repository: R,
    default_ref: String,
    dirty_path: PathBuf,
}

impl<R: Repository> ContentResolver<R> {
    /// Creates a resolver over `repository`.
    pub fn new(repository: R, settings: &Settings) -> Self {
        Self {
            repository,
            default_ref: settings.default_ref().to_owned(),
            dirty_path: settings.dirty_path.clone(),
        }
    }

    /// The repository being served.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Path read for `DIRTY`.
    pub fn dirty_path(&self) -> &Path {
        &self.dirty_path
    }

    /// Runs validate, parse, resolve and fetch for one request.
    ///
    /// The path is percent-decoded before it is checked.
    pub fn respond(&self, request: &Request) -> Result<Response, ServeError> {
        let request = request.decoded();
        validate(&request)?;

        let reference = parse_reference(&request.path, &self.default_ref);
        let revision = resolve(&self.repository, &reference)
            .ok_or_else(|| ServeError::NotFound(reference.to_string()))?;

        tracing::debug!(%reference, %revision, "Resolved reference");

        let content = fetch(&self.repository, &revision, TARGET_FILE, &self.dirty_path)?;
        Ok(Response::text(StatusCode::OK, content))
    }
}

impl ContentResolver<GitCli> {
    /// Opens the working tree at `root` after a flight check.
    ///
    /// Fails if git is missing or `HEAD` does not resolve.
    pub fn start(root: impl Into<PathBuf>, settings: &Settings) -> Result<Self, StartupError> {
        let git = GitCli::new(root);
        git.flight_check().map_err(|e| match e {
            GitError::NotInstalled => StartupError::GitMissing,
            source => StartupError::HeadUnresolvable {
                root: git.root().display().to_string(),
                source,
            },
        })?;

        let dirty_path = git.root().join(&settings.dirty_path);
        let mut resolver = Self::new(git, settings);
        resolver.dirty_path = dirty_path;
        Ok(resolver)
    }
}

impl<R: Repository + 'static> Handler for ContentResolver<R> {
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        match self.respond(request) {
            Ok(response) => Ok(response),
            Err(e) if e.is_client_error() => {
                tracing::info!(
                    method = %request.method,
                    path = %request.path,
                    status = e.status().as_u16(),
                    reason = %e,
                    "Request refused"
                );
                Ok(e.to_response())
            }
            Err(e) => Err(e.into()),
        }
    }
}
