//! The source of "now" for request handlers.
//!
//! Handlers never read the system time directly so that tests can pin the
//! current month.

use std::fmt::Debug;

use time::OffsetDateTime;

/// Provides the current date and time.
pub trait Clock: Debug + Send + Sync {
    /// The current date and time in UTC.
    fn now_utc(&self) -> OffsetDateTime;
}

/// A [Clock] that reads the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A [Clock] that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }
}
