//! CLI entry point - the composition root.
//!
//! Logging and environment are set up here, then the store is wired via
//! [`bootstrap`] and the command is dispatched to its handler. Errors are
//! mapped to exit codes by `CliError`.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use paybook_cli::handlers::{self, list::ListFilter};
use paybook_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap};
use paybook_core::EmployeeId;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open(data_file: Option<&str>) -> Result<CliContext, CliError> {
    bootstrap(CliConfig::resolve(data_file)?)
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let data_file = cli.data_file.as_deref();

    match command {
        Commands::List { department, search } => {
            let ctx = open(data_file)?;
            handlers::list::execute(&ctx, ListFilter::from_args(department, search)).await?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&open(data_file)?, EmployeeId::new(id)).await?;
        }
        Commands::Add(args) => {
            handlers::add::execute(&open(data_file)?, args).await?;
        }
        Commands::Update(args) => {
            handlers::update::execute(&open(data_file)?, args).await?;
        }
        Commands::Delete { id, force } => {
            handlers::delete::execute(&open(data_file)?, EmployeeId::new(id), force).await?;
        }
        Commands::Summary => {
            handlers::summary::execute(&open(data_file)?).await?;
        }
        Commands::Paths => {
            // Diagnostics must work even when the store cannot be opened.
            handlers::paths::execute(data_file)?;
        }
    }

    Ok(())
}

fn report(err: &anyhow::Error) -> ExitCode {
    let cli_err = CliError::classify(err);
    match &cli_err {
        CliError::Validation(messages) => {
            eprintln!("Error: invalid employee data");
            for message in messages {
                eprintln!("  - {message}");
            }
        }
        other => eprintln!("Error: {other}"),
    }
    ExitCode::from(cli_err.exit_code())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}
