//! What to check.

/// Default age, in seconds, above which the resource is reported as `WARNING`.
pub const DEFAULT_WARNING_THRESHOLD: i64 = 3600;

/// Default age, in seconds, above which the resource is reported as `CRITICAL`.
pub const DEFAULT_CRITICAL_THRESHOLD: i64 = 86_400;

/// An immutable description of a single check.
///
/// The URL is kept as given by the operator: it is echoed verbatim in the
/// result message and an invalid URL is reported by the fetcher, not here.
///
/// The thresholds are not required to be ordered. With
/// `warning_threshold > critical_threshold` a stale resource goes straight to
/// `CRITICAL` and `WARNING` is never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub url: String,
    /// Seconds.
    pub warning_threshold: i64,
    /// Seconds.
    pub critical_threshold: i64,
}

impl CheckRequest {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_warning_threshold(mut self, seconds: i64) -> Self {
        self.warning_threshold = seconds;
        self
    }

    #[must_use]
    pub fn with_critical_threshold(mut self, seconds: i64) -> Self {
        self.critical_threshold = seconds;
        self
    }
}
