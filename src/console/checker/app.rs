//! Program to check how old a JSON resource is.
//!
//! ```text
//! cargo run --bin check_last_modified -- --url "http://127.0.0.1:8080/status.json"
//! cargo run --bin check_last_modified -- -u "http://127.0.0.1:8080/status.json" -w 600 -c 3600
//! ```
//!
//! It prints one line and exits with the monitoring-plugin exit code:
//!
//! ```text
//! LastModified WARNING: http://127.0.0.1:8080/status.json is 7200 seconds old (15:04:05)
//! ```
//!
//! Invalid arguments end the process with exit code `1` before any check runs.
use std::process::ExitCode;

use clap::error::ErrorKind;

use super::config::{self, Args};
use super::console::Console;
use super::report::Reporter;
use super::service::Service;
use crate::bootstrap::logging;
use crate::check::request::CheckRequest;
use crate::CurrentClock;

/// Exit code for arguments that cannot be parsed.
pub const INVALID_ARGUMENTS_EXIT_CODE: u8 = 1;

pub async fn run() -> ExitCode {
    let args = match config::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => return exit_on_invalid_arguments(&err),
    };

    ExitCode::from(run_with(&args).await)
}

/// Runs the check for already parsed arguments and returns the exit code.
pub async fn run_with(args: &Args) -> u8 {
    logging::setup(args.log_level, args.log_style);

    let service = Service::new(CheckRequest::from(args), Reporter::new(Console::new()));

    service.run::<CurrentClock>().await
}

fn exit_on_invalid_arguments(err: &clap::Error) -> ExitCode {
    // clap writes errors to stderr, `--help` and `--version` to stdout.
    err.print().ok();

    match err.kind() {
        ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(INVALID_ARGUMENTS_EXIT_CODE),
    }
}
