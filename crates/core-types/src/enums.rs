use serde::{Deserialize, Serialize};

/// The five clinical time-in-range categories.
///
/// Variants are declared from lowest to highest so that the derived `Ord`
/// matches the order in which a stacked bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GlucoseBand {
    VeryLow,
    Low,
    Target,
    High,
    VeryHigh,
}

impl GlucoseBand {
    /// All bands, lowest first.
    pub const ALL: [GlucoseBand; 5] = [
        GlucoseBand::VeryLow,
        GlucoseBand::Low,
        GlucoseBand::Target,
        GlucoseBand::High,
        GlucoseBand::VeryHigh,
    ];

    /// Lower and upper bound of the target range in mg/dL, both inclusive.
    pub const TARGET_RANGE: (f64, f64) = (70.0, 180.0);

    /// Classifies a glucose value (mg/dL) into its band.
    ///
    /// The thresholds reproduce the inclusive integer intervals
    /// `[0,53] [54,69] [70,180] [181,250] [251,inf)` and also place any
    /// fractional value that falls between two of them, so every
    /// non-negative value lands in exactly one band.
    pub fn classify(glucose: f64) -> Self {
        if glucose < 54.0 {
            GlucoseBand::VeryLow
        } else if glucose < 70.0 {
            GlucoseBand::Low
        } else if glucose <= 180.0 {
            GlucoseBand::Target
        } else if glucose <= 250.0 {
            GlucoseBand::High
        } else {
            GlucoseBand::VeryHigh
        }
    }

    /// Human-readable label used in reports and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            GlucoseBand::VeryLow => "Very Low (<54 mg/dL)",
            GlucoseBand::Low => "Low (54-69 mg/dL)",
            GlucoseBand::Target => "Target (70-180 mg/dL)",
            GlucoseBand::High => "High (181-250 mg/dL)",
            GlucoseBand::VeryHigh => "Very High (>250 mg/dL)",
        }
    }

    /// Position of the band in `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_follow_inclusive_intervals() {
        assert_eq!(GlucoseBand::classify(0.0), GlucoseBand::VeryLow);
        assert_eq!(GlucoseBand::classify(53.0), GlucoseBand::VeryLow);
        assert_eq!(GlucoseBand::classify(54.0), GlucoseBand::Low);
        assert_eq!(GlucoseBand::classify(69.0), GlucoseBand::Low);
        assert_eq!(GlucoseBand::classify(70.0), GlucoseBand::Target);
        assert_eq!(GlucoseBand::classify(180.0), GlucoseBand::Target);
        assert_eq!(GlucoseBand::classify(181.0), GlucoseBand::High);
        assert_eq!(GlucoseBand::classify(250.0), GlucoseBand::High);
        assert_eq!(GlucoseBand::classify(251.0), GlucoseBand::VeryHigh);
    }

    #[test]
    fn fractional_values_between_intervals_are_not_lost() {
        assert_eq!(GlucoseBand::classify(53.5), GlucoseBand::VeryLow);
        assert_eq!(GlucoseBand::classify(69.5), GlucoseBand::Low);
        assert_eq!(GlucoseBand::classify(180.5), GlucoseBand::High);
        assert_eq!(GlucoseBand::classify(250.5), GlucoseBand::VeryHigh);
    }

    #[test]
    fn index_matches_declaration_order() {
        for (i, band) in GlucoseBand::ALL.iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 0.0f64..600.0, b in 0.0f64..600.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(GlucoseBand::classify(lo) <= GlucoseBand::classify(hi));
        }
    }
}
