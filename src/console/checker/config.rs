//! Command line of the check.
//!
//! ```text
//! check_last_modified --url http://127.0.0.1:8080/status.json --warning 3600 --critical 86400
//! ```
use std::ffi::OsString;

use clap::Parser;

use crate::bootstrap::logging::{LogLevel, TraceStyle};
use crate::check::request::{CheckRequest, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the JSON resource to monitor.
    #[clap(short, long)]
    pub url: String,

    /// Warning if the resource is older than this many seconds.
    #[clap(short, long, default_value_t = DEFAULT_WARNING_THRESHOLD, value_parser = clap::value_parser!(i64).range(0..))]
    pub warning: i64,

    /// Critical if the resource is older than this many seconds.
    #[clap(short, long, default_value_t = DEFAULT_CRITICAL_THRESHOLD, value_parser = clap::value_parser!(i64).range(0..))]
    pub critical: i64,

    /// Diagnostics written to the standard error.
    #[clap(long, value_enum, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,

    /// Format of the diagnostics.
    #[clap(long, value_enum, default_value_t = TraceStyle::Compact)]
    pub log_style: TraceStyle,
}

/// Parses the command line, program name first.
///
/// # Errors
///
/// Will return the `clap` error for unknown, missing or invalid arguments,
/// and for `--help` and `--version`.
pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

impl From<&Args> for CheckRequest {
    fn from(args: &Args) -> Self {
        CheckRequest::new(&args.url)
            .with_warning_threshold(args.warning)
            .with_critical_threshold(args.critical)
    }
}
