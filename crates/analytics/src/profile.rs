use core_types::{GlucoseBand, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Percentile statistics for all readings sharing one time-of-day key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub key: TimeOfDay,
    /// The key as fractional hours (`hour + minute / 60`).
    pub time_of_day: f64,
    /// Number of readings folded onto this key.
    pub readings: usize,
    pub median: f64,
    pub p5: f64,
    pub p25: f64,
    pub p75: f64,
    pub p95: f64,
}

/// The ambulatory glucose profile: one point per time-of-day key present in
/// the data, ascending. Keys are not resampled onto a uniform grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircadianProfile {
    pub points: Vec<ProfilePoint>,
    /// Bounds of the shaded target overlay, mg/dL.
    pub target_range: (f64, f64),
}

impl CircadianProfile {
    pub fn new(points: Vec<ProfilePoint>) -> Self {
        Self {
            points,
            target_range: GlucoseBand::TARGET_RANGE,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, key: TimeOfDay) -> Option<&ProfilePoint> {
        self.points
            .binary_search_by_key(&key, |p| p.key)
            .ok()
            .map(|i| &self.points[i])
    }
}
