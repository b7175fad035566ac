//! loglint CLI entry point.

use clap::Parser;
use loglint::cli::{self, Cli, Commands, EXIT_ERROR};
use loglint::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_tracing_level());

    let result = match &cli.command {
        Commands::Lint(args) => cli::run_lint(args),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
