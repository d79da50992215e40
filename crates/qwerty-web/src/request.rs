//! The request as handlers see it.

use axum::http::{Method, Uri};
use percent_encoding::percent_decode_str;

/// The parts of an HTTP request the services look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Path as received, starting with `/` or empty. Not percent-decoded;
    /// see [`Request::decoded`].
    pub path: String,
    /// Raw query string without the `?`, empty when absent.
    pub query: String,
}

impl Request {
    /// Builds a request from its parts.
    pub fn new(method: impl Into<String>, path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: query.into(),
        }
    }

    /// A `GET` for `path` with no query.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path, "")
    }

    /// Extracts the request from transport-level method and URI.
    pub fn from_parts(method: &Method, uri: &Uri) -> Self {
        Self::new(
            method.as_str(),
            uri.path(),
            uri.query().unwrap_or_default(),
        )
    }

    /// The same request with its path percent-decoded.
    ///
    /// Escapes that do not decode to UTF-8 become U+FFFD.
    pub fn decoded(&self) -> Self {
        Self {
            path: percent_decode_str(&self.path).decode_utf8_lossy().into_owned(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let uri: Uri = "/foo?x=1".parse().unwrap();
        let request = Request::from_parts(&Method::POST, &uri);
        assert_eq!(request, Request::new("POST", "/foo", "x=1"));

        let uri: Uri = "/".parse().unwrap();
        let request = Request::from_parts(&Method::GET, &uri);
        assert_eq!(request, Request::get("/"));
    }

    #[test]
    fn test_empty_query_marker() {
        let uri: Uri = "/main?".parse().unwrap();
        let request = Request::from_parts(&Method::GET, &uri);
        assert_eq!(request.query, "");
    }

    #[test]
    fn test_decoded_path() {
        assert_eq!(Request::get("/v0%2E3").decoded().path, "/v0.3");
        assert_eq!(Request::get("/..%2fetc").decoded().path, "/../etc");
        assert_eq!(Request::get("/main").decoded().path, "/main");
        assert_eq!(Request::get("/%ff").decoded().path, "/\u{fffd}");

        let request = Request::new("POST", "/a%20b", "x=%41");
        let decoded = request.decoded();
        assert_eq!(decoded.method, "POST");
        assert_eq!(decoded.path, "/a b");
        assert_eq!(decoded.query, "x=%41");
    }
}
