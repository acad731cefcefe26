//! Monitoring plugin to check the age of a JSON resource.
//!
//! ```text
//! cargo run --bin check_last_modified -- --url "http://127.0.0.1:8080/status.json"
//! ```
use std::process::ExitCode;

use last_modified_check::console::checker::app;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    app::run().await
}
