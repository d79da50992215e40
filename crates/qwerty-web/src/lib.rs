//! Shared plumbing for the qwerty.sh web services.
//!
//! Both services are written as plain functions from a [`Request`] to a
//! [`Response`]. This crate supplies everything around that function:
//!
//! - [`Response`] construction, with [`ShellScript`] bodies that fail loudly
//!   when a client pipes an error page into `sh`
//! - [`wrap`], the error boundary that turns handler failures into a 500
//! - [`init_logging`], [`load_env`] and [`ServerArgs`] for process setup
//! - [`serve`], the development server bootstrap
//!
//! ```rust,no_run
//! use qwerty_web::{wrap, Handler, Request, Response, TracingErrorLog};
//! use axum::http::StatusCode;
//!
//! struct Hello;
//!
//! impl Handler for Hello {
//!     fn handle(&self, _request: &Request) -> anyhow::Result<Response> {
//!         Ok(Response::text(StatusCode::OK, "echo hello\n"))
//!     }
//! }
//!
//! let router = wrap(Hello, TracingErrorLog).into_router();
//! ```

mod error;
mod logging;
pub mod middleware;
mod request;
mod response;
mod server;
mod settings;
mod shell;
mod wrap;

pub use error::WebError;
pub use logging::{init_logging, LogFormat};
pub use request::Request;
pub use response::Response;
pub use server::{serve, ServerArgs};
pub use settings::{load_env, load_from};
pub use shell::ShellScript;
pub use wrap::{internal_server_error, wrap, ErrorLog, Handler, TracingErrorLog, Wrapped};
