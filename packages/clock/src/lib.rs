//! Time related functions and types.
//!
//! The check computes the age of a resource as "now" minus its
//! `Last-Modified` time. Where "now" comes from is controlled here so it can
//! be fixed in tests and read from the system clock in production.
//!
//! Clocks return a [`DurationSinceUnixEpoch`], a `std::time::Duration` since
//! the Unix Epoch. It does not depend on the host time zone.
//!
//! ```text
//! Universal time: Mon 2006-01-02 15:04:05 UTC
//! Timestamp:      1136214245
//! ```

pub mod clock;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = std::time::Duration;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
