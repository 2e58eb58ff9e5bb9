//! Graphwalk - traverse and search graph documents
//!
//! Loads JSON, TOML, or YAML graph documents and runs depth-first,
//! breadth-first, and Dijkstra searches over them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing can fail before `Cli.format` exists, so JSON callers
            // are detected from argv
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();
            tracing::debug!(error_type = e.error_type(), code = exit_code as u8, "command_failed");

            if cli.format == Some(OutputFormat::Json) {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format=") {
            Some(value) => Some(value.to_string()),
            None if arg == "--format" => args.next(),
            None => None,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
