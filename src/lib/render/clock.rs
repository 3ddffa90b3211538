//! Wall-clock labels for messages

use chrono::{Local, NaiveTime, Timelike};

/// Source of the local time used to stamp messages
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at one time of day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Out-of-range values fall back to midnight.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Format as a 12-hour `h:mm AM/PM` label
pub fn format_clock(time: NaiveTime) -> String {
    let hour = time.hour();
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), suffix)
}
