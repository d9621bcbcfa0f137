use crate::duration::ClockDuration;
use crate::profile::CircadianProfile;
use chrono::NaiveDateTime;
use core_types::GlucoseBand;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Intercept of the Glucose Management Indicator formula (percent).
pub const GMI_INTERCEPT: f64 = 3.31;
/// Slope of the Glucose Management Indicator formula (percent per mg/dL).
pub const GMI_SLOPE: f64 = 0.02392;

/// Share of readings in each glucose band, in percent.
///
/// The bands partition the value domain, so the five shares always add up
/// to 100 (within floating-point tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInRange {
    pub very_low: f64,
    pub low: f64,
    pub target: f64,
    pub high: f64,
    pub very_high: f64,
}

impl TimeInRange {
    /// Builds the shares from per-band counts, indexed by `GlucoseBand::index`.
    pub fn from_counts(counts: [usize; 5], total: usize) -> Self {
        let pct = |band: GlucoseBand| counts[band.index()] as f64 * 100.0 / total as f64;
        Self {
            very_low: pct(GlucoseBand::VeryLow),
            low: pct(GlucoseBand::Low),
            target: pct(GlucoseBand::Target),
            high: pct(GlucoseBand::High),
            very_high: pct(GlucoseBand::VeryHigh),
        }
    }

    pub fn get(&self, band: GlucoseBand) -> f64 {
        match band {
            GlucoseBand::VeryLow => self.very_low,
            GlucoseBand::Low => self.low,
            GlucoseBand::Target => self.target,
            GlucoseBand::High => self.high,
            GlucoseBand::VeryHigh => self.very_high,
        }
    }

    /// `(band, percent)` pairs, lowest band first.
    pub fn iter(&self) -> impl Iterator<Item = (GlucoseBand, f64)> + '_ {
        GlucoseBand::ALL.into_iter().map(|band| (band, self.get(band)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, pct)| pct).sum()
    }
}

/// Aggregate statistics of one reading set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_readings: usize,
    pub time_in_range: TimeInRange,
    /// Arithmetic mean, mg/dL.
    pub mean_glucose: f64,
    /// 100 x sample standard deviation / mean.
    pub coefficient_of_variation: f64,
}

impl Summary {
    /// Glucose Management Indicator (%), an estimated HbA1c derived from the mean.
    pub fn gmi(&self) -> f64 {
        GMI_INTERCEPT + GMI_SLOPE * self.mean_glucose
    }

    /// One stacked-bar segment per band, lowest first.
    pub fn range_segments(&self) -> Vec<RangeSegment> {
        let mut offset = 0.0;
        self.time_in_range
            .iter()
            .map(|(band, percent)| {
                let duration = ClockDuration::from_percent(percent);
                let segment = RangeSegment {
                    band,
                    label: band.label().to_string(),
                    percent,
                    offset,
                    duration,
                    span: duration.as_std(),
                };
                offset += percent;
                segment
            })
            .collect()
    }
}

/// One band of the stacked time-in-range bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSegment {
    pub band: GlucoseBand,
    pub label: String,
    pub percent: f64,
    /// Sum of the preceding segments' percentages; the segment's baseline.
    pub offset: f64,
    pub duration: ClockDuration,
    #[serde(with = "humantime_serde")]
    pub span: Duration,
}

/// Everything the rendering collaborator needs for the AGP page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgpReport {
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub summary: Summary,
    pub gmi: f64,
    pub time_in_range: Vec<RangeSegment>,
    pub profile: CircadianProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(tir: TimeInRange, mean: f64) -> Summary {
        Summary {
            total_readings: 10,
            time_in_range: tir,
            mean_glucose: mean,
            coefficient_of_variation: 20.0,
        }
    }

    #[test]
    fn gmi_is_linear_in_mean() {
        let s = summary(TimeInRange::from_counts([0, 0, 10, 0, 0], 10), 154.0);
        assert!((s.gmi() - 6.99368).abs() < 1e-9);
    }

    #[test]
    fn from_counts_partitions_to_hundred() {
        let tir = TimeInRange::from_counts([1, 2, 3, 2, 1], 9);
        assert!((tir.total() - 100.0).abs() < 1e-9);
        assert!((tir.get(GlucoseBand::Target) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn segments_stack_in_band_order() {
        let s = summary(TimeInRange::from_counts([1, 1, 6, 1, 1], 10), 140.0);
        let segments = s.range_segments();

        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].band, GlucoseBand::VeryLow);
        assert_eq!(segments[0].offset, 0.0);
        assert_eq!(segments[2].label, "Target (70-180 mg/dL)");
        assert!((segments[2].offset - 20.0).abs() < 1e-9);
        assert!((segments[4].offset - 90.0).abs() < 1e-9);
        // 60% of a day
        assert_eq!(segments[2].duration.to_string(), "14h 24m");
    }

    #[test]
    fn segment_span_serializes_as_human_duration() {
        let s = summary(TimeInRange::from_counts([0, 0, 10, 0, 0], 10), 120.0);
        let target = &s.range_segments()[2];
        let json = serde_json::to_value(target).unwrap();
        assert_eq!(json["span"], "1day");
        assert_eq!(json["duration"]["hours"], 24);
    }
}
