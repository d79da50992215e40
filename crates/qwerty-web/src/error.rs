//! Error types for server setup.

use thiserror::Error;

/// Errors raised while configuring or running a server.
#[derive(Debug, Error)]
pub enum WebError {
    /// Environment configuration could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: std::net::SocketAddr,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
