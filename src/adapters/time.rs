//! Wall-clock adapter.
//!
//! Implements [`Clock`] with the local system time. The reconciler only
//! needs local weekday, hour and calendar day, so `chrono::Local` is the
//! whole story; tests inject a fixed clock instead.

use chrono::Local;

use crate::app::ports::Clock;
use crate::snapshot::Timestamp;

/// Clock backed by the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }
}
