//! advisory-search CLI
//!
//! Thin wrapper over the library: parse arguments, set up logging, load the
//! config, run one command and map failures to exit codes.

use advisory_search::cli::{Cli, Commands};
use advisory_search::{commands, config, AppError};
use anyhow::Result;
use clap::Parser;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load_config(cli.config.as_deref())?;
    debug!("Running {:?}", cli.command);

    let output = match &cli.command {
        Commands::Distance(args) => commands::execute_distance(args)?,
        Commands::Stocks(args) => commands::execute_stocks(args, &config)?,
        Commands::Clients(args) => commands::execute_clients(args, &config)?,
        Commands::Leads(args) => commands::execute_leads(args)?,
        Commands::Advise(args) => commands::execute_advise(args, &config)?,
    };

    Ok(output)
}

/// Map AppError to exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map(AppError::exit_code)
        .unwrap_or(5)
}
