//! Runs the compiled `check_last_modified` binary.
//!
//! The binary reads the system clock, so the resources served here carry a
//! `Last-Modified` computed from the real current time.
use std::process::Output;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use last_modified_check::check::last_modified::IMF_FIXDATE;
use tokio::process::Command;

use crate::common::resource_server::{Environment, Resource};

async fn check_last_modified(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check_last_modified"))
        .args(args)
        .output()
        .await
        .expect("it should run the check binary")
}

fn modified_ago(duration: Duration) -> String {
    (Utc::now() - duration).format(IMF_FIXDATE).to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn it_should_exit_with_ok_for_a_fresh_resource() {
    let env = Environment::start(Resource::json(&modified_ago(Duration::seconds(5)), "{}")).await;

    let output = check_last_modified(&["--url", &env.url()]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(&format!("LastModified OK: {} is ", env.url())));

    env.stop();
}

#[tokio::test]
async fn it_should_exit_with_warning_for_a_resource_older_than_the_warning_threshold() {
    let env = Environment::start(Resource::json(&modified_ago(Duration::minutes(10)), "[]")).await;

    let output = check_last_modified(&["-u", &env.url(), "-w", "60", "-c", "3600"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("LastModified WARNING: "));

    env.stop();
}

#[tokio::test]
async fn it_should_exit_with_critical_for_a_stale_resource() {
    let env = Environment::start(Resource::json(&modified_ago(Duration::days(2)), "{}")).await;

    let output = check_last_modified(&["--url", &env.url()]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).starts_with("LastModified CRITICAL: "));

    env.stop();
}

#[tokio::test]
async fn it_should_exit_with_critical_for_an_http_error_status() {
    let env = Environment::start(Resource::new(StatusCode::SERVICE_UNAVAILABLE)).await;

    let output = check_last_modified(&["--url", &env.url()]).await;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "LastModified CRITICAL: Response Code is 503\n");

    env.stop();
}

#[tokio::test]
async fn it_should_exit_with_unknown_when_the_last_modified_header_is_missing() {
    let env = Environment::start(Resource::new(StatusCode::OK).with_body("{}")).await;

    let output = check_last_modified(&["--url", &env.url()]).await;

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stdout(&output),
        "LastModified UNKNOWN: the response has no Last-Modified header\n"
    );

    env.stop();
}

#[tokio::test]
async fn it_should_keep_the_standard_output_for_the_plugin_line_when_logging() {
    let env = Environment::start(Resource::json(&modified_ago(Duration::seconds(5)), "{}")).await;

    let output = check_last_modified(&["--url", &env.url(), "--log-level", "trace"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(!output.stderr.is_empty());

    env.stop();
}

mod with_invalid_arguments {
    use crate::checker::cli::{check_last_modified, stdout};

    #[tokio::test]
    async fn it_should_exit_with_one_when_the_url_is_missing() {
        let output = check_last_modified(&[]).await;

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
    }

    #[tokio::test]
    async fn it_should_exit_with_one_for_an_unknown_option() {
        let output = check_last_modified(&["--url", "http://127.0.0.1:1/", "--verbose"]).await;

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
    }

    #[tokio::test]
    async fn it_should_exit_with_one_for_a_threshold_that_is_not_a_number() {
        let output = check_last_modified(&["--url", "http://127.0.0.1:1/", "--critical", "soon"]).await;

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
    }
}
