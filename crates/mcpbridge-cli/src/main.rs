//! CLI entry point - the composition root.
//!
//! Settings come from flags and the environment; commands that talk to the
//! provider get a `CliContext` from bootstrap, offline ones do not.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mcpbridge_cli::{Cli, CliError, Commands, bootstrap, handlers};
use mcpbridge_core::Settings;

fn init_tracing(settings: &Settings, verbose: bool) {
    // RUST_LOG wins over LOG_LEVEL
    let fallback = if verbose {
        "debug"
    } else {
        settings.log_filter()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(command: Commands, settings: &Settings) -> Result<(), CliError> {
    match command {
        Commands::Serve => handlers::serve::execute(settings).await,
        Commands::Normalize { url } => handlers::normalize::execute(settings, &url),
        Commands::Name { length } => {
            handlers::name::execute(length);
            Ok(())
        }
        Commands::Connect { app, legacy } => {
            let ctx = bootstrap(settings)?;
            handlers::connect::execute(&ctx, &app, legacy).await
        }
        Commands::Integration { app, name } => {
            let ctx = bootstrap(settings)?;
            handlers::integration::execute(&ctx, &app, name.as_deref()).await
        }
        Commands::Nanoid { uuid, kind } => {
            let ctx = bootstrap(settings)?;
            handlers::nanoid::execute(&ctx, &uuid, kind).await
        }
        Commands::Provision { nanoid, ttl } => {
            let ctx = bootstrap(settings)?;
            handlers::provision::execute(&ctx, &nanoid, &ttl).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings.to_settings();
    init_tracing(&settings, cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{e}");
        }
        return;
    };

    if let Err(err) = run(command, &settings).await {
        tracing::debug!(exit_code = err.exit_code(), "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
