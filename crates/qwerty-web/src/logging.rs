//! Structured logging initialization.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable pretty format (for development).
    #[default]
    Pretty,
    /// JSON format (for production log aggregation).
    Json,
}

impl LogFormat {
    /// Parse log format from string. Anything but `json` is pretty.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize the process-wide subscriber. Call once, before serving.
///
/// `RUST_LOG` takes precedence over `level`.
///
/// ```rust,no_run
/// use qwerty_web::{init_logging, LogFormat};
///
/// init_logging("info", LogFormat::Json);
/// ```
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(level).into());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true),
            )
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }

    tracing::info!(level = %level, format = ?format, "Logging initialized");
}

/// Filter used when `RUST_LOG` is unset: the library crates and both
/// service binaries at `level`, HTTP traces at debug.
fn default_directives(level: &str) -> String {
    format!(
        "qwerty={level},http_qwerty={level},https_qwerty={level},tower_http=debug"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_filter_enables_service_targets() {
        let filter = EnvFilter::new(default_directives("info"));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "https_qwerty", Level::ERROR));
            assert!(tracing::enabled!(target: "https_qwerty", Level::INFO));
            assert!(tracing::enabled!(target: "http_qwerty", Level::INFO));
            assert!(tracing::enabled!(target: "qwerty_serve::resolver", Level::INFO));
            assert!(tracing::enabled!(target: "tower_http::trace", Level::DEBUG));

            assert!(!tracing::enabled!(target: "https_qwerty", Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", Level::INFO));
        });
    }
}
