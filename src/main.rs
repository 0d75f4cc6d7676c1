//! postdb binary.
//!
//! `postdb init` creates the JSON database if it is missing; `postdb serve`
//! runs the HTTP front end on top of it.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postdb::{
    cli::{Cli, Commands},
    commands,
    config::{Config, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
    AppResult,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "postdb failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // --database wins over DATABASE_PATH
    let config = match cli.database {
        Some(path) => Config::from_env().with_database_path(path),
        None => Config::from_env(),
    };
    tracing::debug!(database = %config.database_path.display(), "configuration loaded");

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Init => commands::init::execute(config).await,
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();
}
