use core_types::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A share of a 24-hour day expressed as whole hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl ClockDuration {
    /// Converts a percentage of the day into a clock duration, truncating to
    /// whole minutes.
    ///
    /// Out-of-range percentages are not rejected; they follow the arithmetic
    /// (150% is 36h 0m). Minutes stay in `0..60` even for negative input.
    pub fn from_percent(percent: f64) -> Self {
        let minutes_per_day = f64::from(TimeOfDay::MINUTES_PER_DAY);
        let total_minutes = (percent / 100.0 * minutes_per_day).floor() as i64;
        Self {
            hours: total_minutes.div_euclid(60),
            minutes: total_minutes.rem_euclid(60),
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// The span as a `std::time::Duration`; negative spans become zero.
    pub fn as_std(&self) -> Duration {
        Duration::from_secs(self.total_minutes().max(0) as u64 * 60)
    }
}

impl fmt::Display for ClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
