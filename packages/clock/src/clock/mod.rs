use self::stopped::StoppedClock;
use self::working::WorkingClock;
use crate::DurationSinceUnixEpoch;

pub mod stopped;
pub mod working;

/// A clock that is either the system clock (production) or a clock frozen at
/// a given instant (tests).
///
/// It is only a marker: the time is read through the [`Time`] trait.
#[derive(Debug)]
pub struct Clock<T> {
    clock: std::marker::PhantomData<T>,
}

/// Reads the system time.
pub type Working = Clock<WorkingClock>;
/// Always returns the instant it was last set to.
pub type Stopped = Clock<StoppedClock>;

/// Trait for types that can tell the current time.
pub trait Time: Sized {
    fn now() -> DurationSinceUnixEpoch;

    fn dbg_clock_type() -> String;

    /// Current time as whole seconds since the Unix Epoch.
    ///
    /// Saturates at `i64::MAX`, which is far beyond any realistic clock.
    #[must_use]
    fn now_unix_seconds() -> i64 {
        i64::try_from(Self::now().as_secs()).unwrap_or(i64::MAX)
    }
}
