use crate::error::CoreError;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single glucose capture from the monitor.
///
/// The timestamp is the device's wall clock, without a timezone. Fields are
/// only reachable through `new`, including when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReading")]
pub struct Reading {
    timestamp: NaiveDateTime,
    glucose: f64,
}

#[derive(Deserialize)]
struct RawReading {
    timestamp: NaiveDateTime,
    glucose: f64,
}

impl TryFrom<RawReading> for Reading {
    type Error = CoreError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        Self::new(raw.timestamp, raw.glucose)
    }
}

impl Reading {
    pub fn new(timestamp: NaiveDateTime, glucose: f64) -> Result<Self, CoreError> {
        if !glucose.is_finite() || glucose < 0.0 {
            return Err(CoreError::InvalidGlucose(glucose));
        }
        Ok(Self { timestamp, glucose })
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Glucose concentration in mg/dL.
    pub fn glucose(&self) -> f64 {
        self.glucose
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_timestamp(&self.timestamp)
    }
}

/// The readings of one session, in file order.
///
/// Never empty. Duplicate timestamps are kept and counted individually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingSet {
    readings: Vec<Reading>,
}

impl ReadingSet {
    pub fn new(readings: Vec<Reading>) -> Result<Self, CoreError> {
        if readings.is_empty() {
            return Err(CoreError::EmptyReadingSet);
        }
        Ok(Self { readings })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always `false`; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    pub fn glucose_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|r| r.glucose)
    }

    /// Whether timestamps never decrease from one reading to the next.
    pub fn is_chronological(&self) -> bool {
        self.readings
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp)
    }

    /// First and last timestamp in the set.
    pub fn span(&self) -> (NaiveDateTime, NaiveDateTime) {
        let first = self.readings[0].timestamp;
        self.readings
            .iter()
            .fold((first, first), |(min, max), r| {
                (min.min(r.timestamp), max.max(r.timestamp))
            })
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

/// A wall-clock time of day truncated to the minute.
///
/// Readings from different calendar days that share a wall-clock minute map
/// to the same key; this is what folds a multi-day recording onto one
/// 24-hour axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Returns `None` for values outside `0..24` hours / `0..60` minutes.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Seconds and sub-second precision are discarded.
    pub fn from_timestamp(timestamp: &NaiveDateTime) -> Self {
        Self((timestamp.hour() * 60 + timestamp.minute()) as u16)
    }

    /// The key as fractional hours, `hour + minute / 60`.
    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
