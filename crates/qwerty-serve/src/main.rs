//! https-qwerty: serve qwerty.sh at any revision.

use clap::Parser;
use qwerty_serve::{ContentResolver, Settings};
use qwerty_web::{init_logging, load_env, serve, wrap, ServerArgs, TracingErrorLog};
use std::path::PathBuf;

/// Serve qwerty.sh at the git revision named in the URL path
#[derive(Parser, Debug)]
#[command(name = "https-qwerty")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    /// Git working tree to serve from
    #[arg(long, default_value = ".")]
    repo: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(&args.server.log_level, args.server.log_format());

    if let Err(e) = run(args).await {
        tracing::error!(error = format!("{e:#}"), "https-qwerty failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings: Settings = load_env()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        repo = %args.repo.display(),
        default_ref = %settings.default_ref(),
        "Starting content resolver"
    );

    let resolver = ContentResolver::start(&args.repo, &settings)?;
    tracing::info!(dirty_path = %resolver.dirty_path().display(), "Flight check passed");

    let router = wrap(resolver, TracingErrorLog).into_router();
    serve(router, args.server.addr()).await?;
    Ok(())
}
