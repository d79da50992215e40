//! # qwerty.sh HTTP redirector
//!
//! Answers every plain-HTTP request with a `301` to the same path and query
//! on the HTTPS origin. The body is a shell script, so `curl qwerty.sh | sh`
//! without `-L` prints a hint and exits 2 instead of running an HTML page.

use axum::http::{header, HeaderValue, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use qwerty_web::{Handler, Request, Response, ShellScript};
use serde::Deserialize;
use url::Url;

/// Default redirect origin.
pub const HTTPS_LOCATION: &str = "https://qwerty.sh/";

/// Exit code of the redirect body.
pub const REDIRECT_EXIT: u8 = 2;

/// Bytes escaped in the path. `%` is left alone so existing escapes survive.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Bytes escaped in the query.
const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');

/// Errors building the redirector.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    /// Configured location is not an absolute URL.
    #[error("invalid redirect location '{location}': {source}")]
    InvalidLocation {
        /// The configured value.
        location: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// Configured location has no host to redirect to.
    #[error("redirect location '{0}' has no host")]
    MissingHost(String),
}

/// Environment settings for the redirector.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL to redirect to (`QWERTY_HTTPS_LOCATION`).
    #[serde(rename = "qwerty_https_location", default = "default_location")]
    pub https_location: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            https_location: default_location(),
        }
    }
}

fn default_location() -> String {
    HTTPS_LOCATION.to_owned()
}

/// The body sent with every redirect.
pub fn redirect_script() -> ShellScript {
    ShellScript::error("Use HTTPS.", REDIRECT_EXIT)
        .blank()
        .line("curl -sSL qwerty.sh")
}

/// Replaces the path and query of `base` with the request's.
///
/// The path is kept as sent, dot segments included. Only bytes that cannot
/// appear in a URL are escaped.
pub fn https_location(base: &Url, path: &str, query: &str) -> String {
    let mut location = format!("{}://{}", base.scheme(), base.host_str().unwrap_or_default());
    if let Some(port) = base.port() {
        location.push_str(&format!(":{port}"));
    }

    if !path.starts_with('/') {
        location.push('/');
    }
    location.extend(utf8_percent_encode(path, PATH));

    if !query.is_empty() {
        location.push('?');
        location.extend(utf8_percent_encode(query, QUERY));
    }
    location
}

/// Redirects every request to the configured HTTPS origin.
#[derive(Debug, Clone)]
pub struct Redirector {
    base: Url,
}

impl Redirector {
    /// Creates a redirector to `base`.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Creates a redirector from environment settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, RedirectError> {
        let base = Url::parse(&settings.https_location).map_err(|source| {
            RedirectError::InvalidLocation {
                location: settings.https_location.clone(),
                source,
            }
        })?;
        if base.host_str().is_none() {
            return Err(RedirectError::MissingHost(settings.https_location.clone()));
        }
        Ok(Self::new(base))
    }

    /// The redirect origin.
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Default for Redirector {
    fn default() -> Self {
        Self::from_settings(&Settings::default()).expect("default location is a valid URL")
    }
}

impl Handler for Redirector {
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        let location = https_location(&self.base, &request.path, &request.query);
        let location = HeaderValue::from_str(&location)?;

        Ok(
            Response::shell(StatusCode::MOVED_PERMANENTLY, &redirect_script())
                .header(header::LOCATION, location),
        )
    }
}
