//! Error isolation between handlers and the transport.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::{Request, Response, ShellScript};

/// Exit code of the 500 body.
const INTERNAL_ERROR_EXIT: u8 = 50;

/// A service: one request in, one response out.
///
/// Handlers are called from blocking worker threads and may shell out.
pub trait Handler: Send + Sync + 'static {
    /// Produces the response for `request`.
    fn handle(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Where handler failures are recorded.
pub trait ErrorLog: Send + Sync + 'static {
    /// Records that handling `request` failed with `error`.
    fn log_failure(&self, request: &Request, error: &anyhow::Error);
}

/// [`ErrorLog`] that emits a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log_failure(&self, request: &Request, error: &anyhow::Error) {
        tracing::error!(
            method = %request.method,
            path = %request.path,
            query = %request.query,
            error = format!("{error:#}"),
            "Request handler failed"
        );
    }
}

/// The fixed 500 response.
pub fn internal_server_error() -> Response {
    Response::shell(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ShellScript::error("internal server error", INTERNAL_ERROR_EXIT),
    )
}

/// Wraps `handler` so that failures become a logged 500.
pub fn wrap<H: Handler, L: ErrorLog>(handler: H, log: L) -> Wrapped {
    Wrapped {
        handler: Arc::new(handler),
        log: Arc::new(log),
    }
}

/// A handler behind the error boundary.
#[derive(Clone)]
pub struct Wrapped {
    handler: Arc<dyn Handler>,
    log: Arc<dyn ErrorLog>,
}

impl Wrapped {
    /// Runs the handler. Errors and panics are logged and turned into 500.
    pub fn call(&self, request: &Request) -> Response {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.handler.handle(request)));
        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => self.fail(request, &error),
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic payload".to_owned());
                self.fail(request, &anyhow::anyhow!("handler panicked: {message}"))
            }
        }
    }

    fn fail(&self, request: &Request, error: &anyhow::Error) -> Response {
        self.log.log_failure(request, error);
        internal_server_error()
    }

    /// Routes every method and path to this handler.
    pub fn into_router(self) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(self)
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(request_id_middleware))
    }
}

/// Runs the wrapped handler on the blocking pool.
async fn dispatch(
    State(wrapped): State<Wrapped>,
    method: Method,
    uri: Uri,
) -> axum::response::Response {
    let request = Request::from_parts(&method, &uri);
    let worker = wrapped.clone();
    let job_request = request.clone();

    match tokio::task::spawn_blocking(move || worker.call(&job_request)).await {
        Ok(response) => response.into_response(),
        Err(join_error) => wrapped
            .fail(&request, &anyhow::anyhow!("handler task failed: {join_error}"))
            .into_response(),
    }
}
