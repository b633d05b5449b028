//! CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pllpy_cli::{Cli, CliContext, Commands, exit_code_for, handlers};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
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

    let ctx = CliContext::from_cli(&cli)?;

    match command {
        Commands::CheckDeps => handlers::check_deps::execute(&ctx),
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Plan { json } => handlers::plan::execute(&ctx, *json),
        Commands::Build {
            build_dir,
            dry_run,
            json,
        } => handlers::build::execute(&ctx, build_dir.as_deref(), *dry_run, *json),
        Commands::Install {
            prefix,
            site_dir,
            build_dir,
        } => handlers::install::execute(
            &ctx,
            prefix.as_deref(),
            site_dir.as_deref(),
            build_dir.as_deref(),
        ),
        Commands::Status { build_dir } => handlers::status::execute(&ctx, build_dir.as_deref()),
    }
}

fn main() -> ExitCode {
    // Load environment variables before clap reads PYTHON
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
