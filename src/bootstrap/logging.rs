//! Setup for the check diagnostics.
//!
//! Standard output is reserved for the plugin line, so every trace goes to
//! the standard error. The level is chosen on the command line:
//!
//! - `off` (default, nothing is logged)
//! - `error`
//! - `warn`
//! - `info`
//! - `debug`
//! - `trace`
use std::sync::Once;

use clap::ValueEnum;
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceStyle {
    Full,
    Pretty,
    Compact,
    Json,
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn setup(log_level: LogLevel, style: TraceStyle) {
    let filter = map_to_tracing_level_filter(log_level);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stderr_init(filter, style);
    });
}

#[must_use]
pub fn map_to_tracing_level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stderr_init(filter: LevelFilter, style: TraceStyle) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr);

    let () = match style {
        TraceStyle::Full => builder.init(),
        TraceStyle::Pretty => builder.pretty().with_file(true).init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    debug!("Logging initialized: {style}");
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Full => "Full Style",
            TraceStyle::Pretty => "Pretty Style with File Paths",
            TraceStyle::Compact => "Compact Style",
            TraceStyle::Json => "Json Format",
        };

        f.write_str(style)
    }
}
