//! Rounding helpers shared by every aggregate.

/// Round `value` to `decimals` places, exact ties to the even neighbour.
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round_ties_even() / factor;
    // Avoid reporting -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Number of distinct values (exact float comparison)
pub fn distinct_count(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(59.96, 1), 60.0);
        assert_eq!(round_to(-0.0001, 2), 0.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_to_ties_even() {
        assert_eq!(round_to(1.125, 2), 1.12);
        assert_eq!(round_to(56.25, 1), 56.2);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count(&[]), 0);
        assert_eq!(distinct_count(&[4.0, 4.0, 4.0]), 1);
        assert_eq!(distinct_count(&[1.0, 2.0, 1.0, 3.0]), 3);
    }
}
