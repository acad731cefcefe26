//! The time when the process started.
use std::time::SystemTime;

lazy_static! {
    /// Captured the first time it is dereferenced.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
