use crate::error::AnalyticsError;
use crate::profile::{CircadianProfile, ProfilePoint};
use crate::report::{AgpReport, Summary, TimeInRange};
use crate::stats;
use core_types::{GlucoseBand, ReadingSet, TimeOfDay};
use std::collections::BTreeMap;
use tracing::debug;

/// A stateless calculator for deriving AGP metrics from a reading set.
#[derive(Debug, Default)]
pub struct AgpEngine {}

impl AgpEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes time-in-range shares, mean glucose and %CV.
    ///
    /// # Errors
    ///
    /// * `NotEnoughData` - fewer than two readings; the sample standard
    ///   deviation is undefined.
    /// * `DivisionByZero` - the mean is zero, so %CV is undefined.
    pub fn summarize(&self, readings: &ReadingSet) -> Result<Summary, AnalyticsError> {
        let values: Vec<f64> = readings.glucose_values().collect();
        let total = values.len();

        let mut counts = [0usize; 5];
        for &value in &values {
            counts[GlucoseBand::classify(value).index()] += 1;
        }
        let time_in_range = TimeInRange::from_counts(counts, total);

        let mean_glucose = stats::mean(&values)
            .ok_or_else(|| AnalyticsError::NotEnoughData("mean of an empty reading set".to_string()))?;
        let coefficient_of_variation = self.coefficient_of_variation(&values, mean_glucose)?;

        debug!(
            total,
            mean = mean_glucose,
            cv = coefficient_of_variation,
            target = time_in_range.target,
            "Computed summary"
        );

        Ok(Summary {
            total_readings: total,
            time_in_range,
            mean_glucose,
            coefficient_of_variation,
        })
    }

    /// Folds readings onto a 24-hour axis by wall-clock minute and computes
    /// the median and 5/25/75/95th percentiles of each minute present.
    pub fn circadian_profile(&self, readings: &ReadingSet) -> Result<CircadianProfile, AnalyticsError> {
        let mut groups: BTreeMap<TimeOfDay, Vec<f64>> = BTreeMap::new();
        for reading in readings {
            groups
                .entry(reading.time_of_day())
                .or_default()
                .push(reading.glucose());
        }

        let points = groups
            .into_iter()
            .map(|(key, mut values)| -> Result<ProfilePoint, AnalyticsError> {
                stats::sort_ascending(&mut values);
                let at = |p: f64| {
                    stats::percentile(&values, p).ok_or_else(|| {
                        AnalyticsError::NotEnoughData(format!("no readings at {key}"))
                    })
                };
                Ok(ProfilePoint {
                    key,
                    time_of_day: key.hours(),
                    readings: values.len(),
                    median: at(50.0)?,
                    p5: at(5.0)?,
                    p25: at(25.0)?,
                    p75: at(75.0)?,
                    p95: at(95.0)?,
                })
            })
            .collect::<Result<Vec<_>, AnalyticsError>>()?;

        debug!(keys = points.len(), "Computed circadian profile");
        Ok(CircadianProfile::new(points))
    }

    /// Builds the full report handed to the rendering collaborator.
    pub fn report(&self, readings: &ReadingSet) -> Result<AgpReport, AnalyticsError> {
        let summary = self.summarize(readings)?;
        let profile = self.circadian_profile(readings)?;
        let (period_start, period_end) = readings.span();

        Ok(AgpReport {
            period_start,
            period_end,
            gmi: summary.gmi(),
            time_in_range: summary.range_segments(),
            summary,
            profile,
        })
    }

    fn coefficient_of_variation(&self, values: &[f64], mean: f64) -> Result<f64, AnalyticsError> {
        let std_dev = stats::sample_std_dev(values, mean).ok_or_else(|| {
            AnalyticsError::NotEnoughData(format!(
                "coefficient of variation needs at least 2 readings, got {}",
                values.len()
            ))
        })?;

        if mean == 0.0 {
            return Err(AnalyticsError::DivisionByZero(
                "coefficient_of_variation".to_string(),
            ));
        }

        Ok(std_dev / mean * 100.0)
    }
}
