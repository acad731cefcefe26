//! **Last-Modified check** is a monitoring plugin that tells how old a JSON
//! resource served over HTTP is.
//!
//! It sends one `GET` to a URL, reads the `Last-Modified` response header and
//! grades the age of the resource against two thresholds:
//!
//! ```text
//! $ check_last_modified --url http://127.0.0.1:8080/status.json --warning 3600 --critical 86400
//! LastModified WARNING: http://127.0.0.1:8080/status.json is 7200 seconds old (15:04:05)
//! $ echo $?
//! 1
//! ```
//!
//! The response must also be healthy for the age to matter:
//!
//! - a status code above `399` is `CRITICAL`,
//! - a missing or malformed `Last-Modified` header is `UNKNOWN`,
//! - a body that is not a single JSON value is `CRITICAL`.
//!
//! A request that cannot be completed at all is `UNKNOWN`.
//!
//! # Exit codes
//!
//! Severity  | Exit code
//! ----------|----------
//! OK        | 0
//! WARNING   | 1
//! CRITICAL  | 2
//! UNKNOWN   | 3
//!
//! Invalid command line arguments exit with `1` before anything is checked.
//!
//! # Components
//!
//! - [`check`]: the fetcher and the classifier. The classifier is a pure
//!   function, the current time is given by a clock.
//! - [`console::checker`]: the command line program and the plugin output.
//! - [`bootstrap`]: diagnostics, written to `stderr` only.
//!
//! # Clock
//!
//! The age of the resource depends on the current time. It is read through
//! `CurrentClock`, which is the system clock in production and a clock
//! stopped at a settable instant when testing. See the
//! `last-modified-check-clock` package.
pub mod bootstrap;
pub mod check;
pub mod console;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = last_modified_check_clock::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = last_modified_check_clock::clock::Stopped;
