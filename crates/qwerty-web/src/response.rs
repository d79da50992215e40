//! Response values built by handlers.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use bytes::{Bytes, BytesMut};

use crate::ShellScript;

/// Status, headers and body of a response.
///
/// Headers keep insertion order, which is the order they go on the wire.
/// Names may repeat.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Vec<Bytes>,
}

impl Response {
    /// Creates an empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A `text/plain` response with a single body chunk.
    pub fn text(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status)
            .header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .chunk(body)
    }

    /// A `text/plain` response whose body is a shell script.
    pub fn shell(status: StatusCode, script: &ShellScript) -> Self {
        Self::text(status, script.render())
    }

    /// Appends a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Appends a body chunk.
    pub fn chunk(mut self, chunk: impl Into<Bytes>) -> Self {
        self.body.push(chunk.into());
        self
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status line, e.g. `301 Moved Permanently`.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {reason}", self.status.as_u16()),
            None => self.status.as_u16().to_string(),
        }
    }

    /// Headers in wire order.
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// First value of the named header.
    pub fn header_value(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Body chunks.
    pub fn chunks(&self) -> &[Bytes] {
        &self.body
    }

    /// The whole body as one buffer.
    pub fn body_bytes(&self) -> Bytes {
        match self.body.as_slice() {
            [] => Bytes::new(),
            [only] => only.clone(),
            chunks => {
                let mut buf = BytesMut::with_capacity(chunks.iter().map(Bytes::len).sum());
                for chunk in chunks {
                    buf.extend_from_slice(chunk);
                }
                buf.freeze()
            }
        }
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let body = Body::from(self.body_bytes());
        let mut response = axum::response::Response::new(body);
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        for (name, value) in self.headers {
            headers.append(name, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(
            Response::new(StatusCode::MOVED_PERMANENTLY).status_line(),
            "301 Moved Permanently"
        );
        assert_eq!(Response::new(StatusCode::OK).status_line(), "200 OK");
    }

    #[test]
    fn test_headers_keep_order() {
        let response = Response::text(StatusCode::MOVED_PERMANENTLY, "x")
            .header(header::LOCATION, HeaderValue::from_static("https://qwerty.sh/"));

        let names: Vec<_> = response.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["content-type", "location"]);
        assert_eq!(
            response.header_value(&header::LOCATION).unwrap().to_str().unwrap(),
            "https://qwerty.sh/"
        );
    }

    #[test]
    fn test_body_chunks_concatenate() {
        let response = Response::new(StatusCode::OK).chunk("echo ").chunk("hi\n");
        assert_eq!(response.chunks().len(), 2);
        assert_eq!(response.body_bytes(), Bytes::from_static(b"echo hi\n"));
        assert!(Response::new(StatusCode::OK).body_bytes().is_empty());
    }

    #[test]
    fn test_into_response() {
        let script = ShellScript::error("bad request", 40);
        let response = Response::shell(StatusCode::BAD_REQUEST, &script).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    }
}
