//! Wall clock used to stamp each resync.

use crate::infrastructure::ports::ClockPort;
use chrono::{DateTime, Utc};

/// Reads the current UTC time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_current_time() {
        let before = Utc::now();
        let now = SystemClock::new().now();
        assert!(now >= before);
        assert!(now <= Utc::now());
    }
}
