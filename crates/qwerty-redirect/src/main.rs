//! http-qwerty: redirect plain HTTP to HTTPS.

use clap::Parser;
use qwerty_redirect::{Redirector, Settings};
use qwerty_web::{init_logging, load_env, serve, wrap, ServerArgs, TracingErrorLog};

/// Redirect HTTP requests for qwerty.sh to HTTPS
#[derive(Parser, Debug)]
#[command(name = "http-qwerty")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(&args.server.log_level, args.server.log_format());

    if let Err(e) = run(args).await {
        tracing::error!(error = format!("{e:#}"), "http-qwerty failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings: Settings = load_env()?;
    let redirector = Redirector::from_settings(&settings)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        location = %redirector.base(),
        "Starting redirector"
    );

    let router = wrap(redirector, TracingErrorLog).into_router();
    serve(router, args.server.addr()).await?;
    Ok(())
}
