//! Turns a fetch outcome into a [`CheckResult`].
//!
//! The rules are evaluated in order and the first one that applies decides
//! the result:
//!
//! 1. The request failed: `UNKNOWN` with the transport error.
//! 2. The status code is above 399: `CRITICAL`, `Response Code is <code>`.
//! 3. `Last-Modified` is absent or not an `IMF-fixdate`: `UNKNOWN` with the
//!    parse error. The body is not looked at.
//! 4. The body is not a single JSON value: `CRITICAL`,
//!    `Cannot parse <decoder error>`.
//! 5. Otherwise the age of the resource is graded against the thresholds.
//!
//! A bad timestamp is `UNKNOWN` while a bad body is `CRITICAL`. Both mean the
//! response cannot be trusted but the two levels are kept apart on purpose.
use chrono::{DateTime, Utc};
use last_modified_check_clock::clock::Time;
use tracing::debug;

use super::json;
use super::last_modified;
use super::outcome::{Body, FetchOutcome, HttpResponse};
use super::request::CheckRequest;
use super::result::CheckResult;
use super::severity::Severity;

/// Highest status code that is not an HTTP error.
const LAST_NON_ERROR_STATUS: u16 = 399;

/// Classifies an outcome using the current time of the clock `T`.
#[must_use]
pub fn classify_now<T: Time>(request: &CheckRequest, outcome: &FetchOutcome) -> CheckResult {
    classify(request, outcome, T::now_unix_seconds())
}

/// Classifies an outcome as if the current time were `now_unix_seconds`.
///
/// It is a pure function: the same arguments always give the same result.
#[must_use]
pub fn classify(request: &CheckRequest, outcome: &FetchOutcome, now_unix_seconds: i64) -> CheckResult {
    let response = match outcome {
        FetchOutcome::TransportError(err) => return CheckResult::unknown(err.as_str()),
        FetchOutcome::Response(response) => response,
    };

    classify_response(request, response, now_unix_seconds)
}

fn classify_response(request: &CheckRequest, response: &HttpResponse, now_unix_seconds: i64) -> CheckResult {
    if response.status > LAST_NON_ERROR_STATUS {
        return CheckResult::critical(format!("Response Code is {}", response.status));
    }

    let last_modified = match last_modified::parse(response.last_modified.as_deref()) {
        Ok(last_modified) => last_modified,
        Err(err) => return CheckResult::unknown(err.to_string()),
    };

    if let Err(err) = validate_body(&response.body) {
        return CheckResult::critical(format!("Cannot parse {err}"));
    }

    let age = age(now_unix_seconds, &last_modified);
    let severity = grade(request, age);

    debug!(%last_modified, age, %severity, "graded resource age");

    CheckResult::new(
        severity,
        format!(
            "{} is {} seconds old ({})",
            request.url,
            age,
            last_modified.format("%H:%M:%S")
        ),
    )
}

fn validate_body(body: &Body) -> Result<(), String> {
    match body {
        Body::Received(bytes) => json::validate(bytes).map_err(|e| e.to_string()),
        Body::Unreadable(err) => Err(err.clone()),
    }
}

/// Seconds elapsed since the resource was modified. Negative when the
/// resource claims to be from the future.
fn age(now_unix_seconds: i64, last_modified: &DateTime<Utc>) -> i64 {
    now_unix_seconds.saturating_sub(last_modified.timestamp())
}

/// Both comparisons are independent: critical does not require warning.
fn grade(request: &CheckRequest, age: i64) -> Severity {
    let mut severity = Severity::Ok;

    if request.warning_threshold < age {
        severity = Severity::Warning;
    }

    if request.critical_threshold < age {
        severity = Severity::Critical;
    }

    severity
}
