use last_modified_check_clock::clock::Time;

use super::printer::Printer;
use super::report::Reporter;
use crate::check::classifier::classify_now;
use crate::check::fetcher::Fetcher;
use crate::check::request::CheckRequest;
use crate::check::result::CheckResult;

/// Runs one check and reports it.
pub struct Service<P: Printer> {
    pub(crate) request: CheckRequest,
    pub(crate) reporter: Reporter<P>,
}

impl<P: Printer> Service<P> {
    #[must_use]
    pub fn new(request: CheckRequest, reporter: Reporter<P>) -> Self {
        Self { request, reporter }
    }

    /// Fetches the URL and classifies the response at the time of the clock `T`.
    ///
    /// Never fails: a client that cannot be built is reported as `UNKNOWN`,
    /// like any other transport problem.
    pub async fn run_check<T: Time>(&self) -> CheckResult {
        tracing::info!(url = %self.request.url, "Running last-modified check ...");

        let fetcher = match Fetcher::new() {
            Ok(fetcher) => fetcher,
            Err(err) => return CheckResult::unknown(err.to_string()),
        };

        let outcome = fetcher.fetch(&self.request.url).await;

        let result = classify_now::<T>(&self.request, &outcome);

        tracing::info!(severity = %result.severity, message = %result.message, "Check finished");

        result
    }

    /// Runs the check, prints the plugin line and returns the exit code.
    pub async fn run<T: Time>(&self) -> u8 {
        let result = self.run_check::<T>().await;

        self.reporter.report(&result)
    }

    #[must_use]
    pub fn reporter(&self) -> &Reporter<P> {
        &self.reporter
    }
}
