/// Marker for a clock frozen at an instant chosen by the caller.
#[allow(clippy::module_name_repetitions)]
pub struct StoppedClock {}

/// Operations to move a stopped clock around.
///
/// The instant is kept per thread, so tests running in parallel do not see
/// each other's clock.
#[allow(clippy::module_name_repetitions)]
pub trait Stopped: clock::Time {
    /// Sets the clock to a given time.
    fn local_set(unix_time: &DurationSinceUnixEpoch);

    /// Resets the clock to its default instant: the Unix Epoch when testing
    /// this crate, the process start time otherwise.
    fn local_reset();
}

use super::Time;
use crate::clock;
use crate::DurationSinceUnixEpoch;

impl Time for clock::Stopped {
    fn now() -> DurationSinceUnixEpoch {
        detail::FIXED_TIME.with(|time| *time.borrow())
    }

    fn dbg_clock_type() -> String {
        "Stopped".to_owned()
    }
}

impl Stopped for clock::Stopped {
    fn local_set(unix_time: &DurationSinceUnixEpoch) {
        detail::FIXED_TIME.with(|time| {
            *time.borrow_mut() = *unix_time;
        });
    }

    fn local_reset() {
        Self::local_set(&detail::get_default_fixed_time());
    }
}


mod detail {
    use std::cell::RefCell;
    use std::time::SystemTime;

    use crate::static_time;
    use crate::DurationSinceUnixEpoch;

    thread_local!(pub static FIXED_TIME: RefCell<DurationSinceUnixEpoch> = RefCell::new(get_default_fixed_time()));

    pub fn get_app_start_time() -> DurationSinceUnixEpoch {
        (*static_time::TIME_AT_APP_START)
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
    }

    #[cfg(not(test))]
    pub fn get_default_fixed_time() -> DurationSinceUnixEpoch {
        get_app_start_time()
    }

    #[cfg(test)]
    pub fn get_default_fixed_time() -> DurationSinceUnixEpoch {
        DurationSinceUnixEpoch::ZERO
    }
}
