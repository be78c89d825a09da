//! Wall-clock sources for series sampling and news dating.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current wall-clock time in the market's timezone.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it to a fixed market timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Clock reporting local time in `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    /// NSE trades on India Standard Time.
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
