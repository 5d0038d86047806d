//! Time helpers

use std::time::{SystemTime, UNIX_EPOCH};

use taskgate_domain::ports::Clock;

/// Wall-clock helpers
pub struct TimeUtils;

impl TimeUtils {
    /// Seconds since the Unix epoch, or 0 if the system clock is before it
    pub fn now_unix_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        TimeUtils::now_unix_secs()
    }
}
