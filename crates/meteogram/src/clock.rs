//! Time source
//!
//! Default request dates are derived from "now". Taking the current time
//! through a trait lets callers and tests pin it.

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Source of the current UTC time
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current UTC time from the system clock
#[must_use]
pub fn current_utc_time() -> DateTime<Utc> {
    SystemClock.now()
}
