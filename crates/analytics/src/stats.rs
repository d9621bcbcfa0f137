//! Small descriptive-statistics helpers shared by the calculators.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Percentile of an ascending slice using linear interpolation between the
/// two closest ranks (`rank = p / 100 * (n - 1)`).
///
/// `p` is clamped to `[0, 100]`. `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let (first, last) = (sorted.first()?, sorted.last()?);
    if sorted.len() == 1 {
        return Some(*first);
    }

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(sorted.len() - 1);
    let (a, b) = (sorted[lower], sorted[upper]);
    let fraction = rank - lower as f64;

    // Clamping keeps the result inside [a, b] despite rounding, which is
    // what makes successive percentiles non-decreasing.
    let value = (a + (b - a) * fraction).max(a).min(b);
    debug_assert!(*first <= value && value <= *last);
    Some(value)
}

/// Sorts in place with a total order so NaN cannot poison the comparison.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentile_matches_linear_interpolation() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&data, 0.0), Some(1.0));
        assert_eq!(percentile(&data, 100.0), Some(4.0));
        assert_eq!(percentile(&data, 50.0), Some(2.5));
        assert_eq!(percentile(&data, 25.0), Some(1.75));
        assert!((percentile(&data, 5.0).unwrap() - 1.15).abs() < 1e-12);
        assert!((percentile(&data, 95.0).unwrap() - 3.85).abs() < 1e-12);
    }

    #[test]
    fn single_value_is_every_percentile() {
        for p in [5.0, 25.0, 50.0, 75.0, 95.0] {
            assert_eq!(percentile(&[142.0], p), Some(142.0));
        }
    }

    #[test]
    fn empty_inputs_are_undefined() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std_dev(&[5.0], 5.0), None);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data).unwrap();
        assert_eq!(m, 5.0);
        let sd = sample_std_dev(&data, m).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn percentiles_are_non_decreasing(
            mut values in prop::collection::vec(0.0f64..500.0, 1..64),
            p in 0.0f64..100.0,
            q in 0.0f64..100.0,
        ) {
            sort_ascending(&mut values);
            let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
            prop_assert!(percentile(&values, lo).unwrap() <= percentile(&values, hi).unwrap());
        }
    }
}
