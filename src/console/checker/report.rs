//! Output of a check following the monitoring-plugin convention.
//!
//! | Severity | Exit code | Standard output                  |
//! |----------|-----------|----------------------------------|
//! | OK       | 0         | `LastModified OK: <message>`       |
//! | WARNING  | 1         | `LastModified WARNING: <message>`  |
//! | CRITICAL | 2         | `LastModified CRITICAL: <message>` |
//! | UNKNOWN  | 3         | `LastModified UNKNOWN: <message>`  |
use super::printer::Printer;
use crate::check::result::CheckResult;

/// Name printed in front of every result.
pub const CHECK_NAME: &str = "LastModified";

pub struct Reporter<P: Printer> {
    printer: P,
}

impl<P: Printer> Reporter<P> {
    #[must_use]
    pub fn new(printer: P) -> Self {
        Self { printer }
    }

    /// Prints the plugin line and returns the process exit code.
    pub fn report(&self, result: &CheckResult) -> u8 {
        self.printer.println(&plugin_line(result));

        result.severity.exit_code()
    }

    #[must_use]
    pub fn printer(&self) -> &P {
        &self.printer
    }
}

#[must_use]
pub fn plugin_line(result: &CheckResult) -> String {
    format!("{CHECK_NAME} {result}")
}
