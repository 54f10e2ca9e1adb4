//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, bootstraps the resolver
//! and dispatches to a handler. Errors carrying a `CliError` set the exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use resfind_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;
    tracing::debug!(search_paths = ?ctx.registry.search_paths(), "resolver ready");

    match command {
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Find { name } => handlers::find::execute(&ctx, name),
        Commands::Show { name } => handlers::show::execute(&ctx, name),
        Commands::Copy { name, dest } => handlers::copy::execute(&ctx, name, dest),
    }
}

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
