//! The last-modified check: fetch a URL, then classify the response.
//!
//! ```text
//! FetchOutcome ──► classifier ──► CheckResult { severity, message }
//! ```
//!
//! - [`fetcher`] performs the HTTP GET.
//! - [`classifier`] decides the [`Severity`](severity::Severity) from the
//!   status code, the `Last-Modified` header and the body.
//! - [`last_modified`] and [`json`] are the two probes the classifier runs.
pub mod classifier;
pub mod fetcher;
pub mod json;
pub mod last_modified;
pub mod outcome;
pub mod request;
pub mod result;
pub mod severity;
