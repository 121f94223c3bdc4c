//! Moment Metrics
//!
//! Mean, median, dispersion and shape of the rating and polarity series.
//!
//! - Standard deviation and variance are Bessel-corrected (divisor n-1)
//! - Skewness and kurtosis use the biased population moments
//!   (`g1 = m3 / m2^1.5`, `g2 = m4 / m2^2 - 3`)
//! - Series with fewer than 2 values report the all-zero struct
//! - Null values are excluded, unlike the bucketing stages which read them as 0

use crate::percentiles::compute_median;
use reviewlens_core::{ReviewRecord, round_to};
use serde::{Deserialize, Serialize};

/// Decimal places kept for every moment metric
pub const MOMENT_DECIMALS: i32 = 6;

/// Minimum number of values for a series to produce non-zero moments
pub const MIN_MOMENT_SAMPLES: usize = 2;

/// Relative tolerance under which the second moment is treated as zero
const ZERO_VARIANCE_RESOLUTION: f64 = 1e-15;

/// Moment statistics for one numeric series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentMetrics {
    /// Arithmetic mean
    pub mean: f64,
    /// Median
    pub median: f64,
    /// Sample standard deviation (n-1)
    pub std: f64,
    /// Sample variance (n-1)
    pub variance: f64,
    /// Skewness (biased, Fisher-Pearson)
    pub skewness: f64,
    /// Excess kurtosis (biased, Fisher)
    pub kurtosis: f64,
}

impl MomentMetrics {
    /// Whether this is the insufficient-data marker
    pub fn is_zero(&self) -> bool {
        *self == MomentMetrics::default()
    }
}

/// Moment metrics for both review series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedMetrics {
    /// Rating series (absent and malformed ratings excluded)
    pub rating: MomentMetrics,
    /// Polarity series (absent polarities excluded)
    pub polarity: MomentMetrics,
}

/// Compute moment metrics for one series, unrounded
///
/// Returns the zero struct when fewer than [`MIN_MOMENT_SAMPLES`] values are given.
pub fn compute_moments(samples: &[f64]) -> MomentMetrics {
    if samples.len() < MIN_MOMENT_SAMPLES {
        return MomentMetrics::default();
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let median = compute_median(samples);

    // Central moments
    let (sum2, sum3, sum4) = samples.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), x| {
        let d = x - mean;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    });

    let variance = sum2 / (n - 1.0);
    let std = variance.sqrt();

    let m2 = sum2 / n;
    let m3 = sum3 / n;
    let m4 = sum4 / n;

    // A constant series has no defined shape
    let degenerate = m2 <= (ZERO_VARIANCE_RESOLUTION * mean.abs()).powi(2);
    let (skewness, kurtosis) = if degenerate || m2 == 0.0 {
        (0.0, 0.0)
    } else {
        (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
    };

    MomentMetrics {
        mean,
        median,
        std,
        variance,
        skewness,
        kurtosis,
    }
}

/// Round every metric to [`MOMENT_DECIMALS`] places
fn rounded(metrics: MomentMetrics) -> MomentMetrics {
    MomentMetrics {
        mean: round_to(metrics.mean, MOMENT_DECIMALS),
        median: round_to(metrics.median, MOMENT_DECIMALS),
        std: round_to(metrics.std, MOMENT_DECIMALS),
        variance: round_to(metrics.variance, MOMENT_DECIMALS),
        skewness: round_to(metrics.skewness, MOMENT_DECIMALS),
        kurtosis: round_to(metrics.kurtosis, MOMENT_DECIMALS),
    }
}

/// Compute rounded moment metrics for the rating and polarity series
pub fn compute_advanced_metrics(records: &[ReviewRecord]) -> AdvancedMetrics {
    if records.is_empty() {
        return AdvancedMetrics::default();
    }

    let ratings: Vec<f64> = records.iter().filter_map(ReviewRecord::rating_value).collect();
    let polarities: Vec<f64> = records
        .iter()
        .filter_map(ReviewRecord::polarity_value)
        .collect();

    AdvancedMetrics {
        rating: rounded(compute_moments(&ratings)),
        polarity: rounded(compute_moments(&polarities)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_moments() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let m = compute_moments(&samples);

        assert!((m.mean - 3.0).abs() < 1e-12);
        assert!((m.median - 3.0).abs() < 1e-12);
        assert!((m.variance - 2.5).abs() < 1e-12);
        assert!((m.std - 2.5f64.sqrt()).abs() < 1e-12);
        assert!(m.skewness.abs() < 1e-12);
        // Uniform-like spread: m2 = 2, m4 = 6.8 → 6.8 / 4 - 3
        assert!((m.kurtosis - (-1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_skewed_series() {
        // Right-skewed: one large value
        let samples = vec![1.0, 1.0, 4.0];
        let m = compute_moments(&samples);

        // mean 2, deviations -1,-1,2 → m2 = 2, m3 = 2, m4 = 6
        assert!((m.skewness - 2.0 / 2f64.powf(1.5)).abs() < 1e-12);
        assert!((m.kurtosis - (6.0 / 4.0 - 3.0)).abs() < 1e-12);
        assert!(m.skewness > 0.0);
    }

    #[test]
    fn test_small_sample_guard() {
        assert!(compute_moments(&[]).is_zero());
        assert!(compute_moments(&[4.2]).is_zero());
    }

    #[test]
    fn test_constant_series_has_zero_shape() {
        let m = compute_moments(&[0.1, 0.1, 0.1]);
        assert!((m.mean - 0.1).abs() < 1e-12);
        assert_eq!(m.skewness, 0.0);
        assert_eq!(m.kurtosis, 0.0);
        assert!(m.variance.abs() < 1e-12);
    }

    #[test]
    fn test_advanced_metrics_excludes_nulls() {
        let records = vec![
            ReviewRecord::default().with_rating(5.0).with_polarity(0.8),
            ReviewRecord::default().with_rating(1.0),
            ReviewRecord::default().with_rating(3.0),
        ];
        let metrics = compute_advanced_metrics(&records);

        assert!((metrics.rating.mean - 3.0).abs() < 1e-9);
        assert!((metrics.rating.variance - 4.0).abs() < 1e-9);
        // Only one polarity present
        assert!(metrics.polarity.is_zero());
    }

    #[test]
    fn test_advanced_metrics_rounding() {
        let records: Vec<ReviewRecord> = [1.0, 2.0, 2.0]
            .iter()
            .map(|&r| ReviewRecord::default().with_rating(r))
            .collect();
        let metrics = compute_advanced_metrics(&records);

        // mean 5/3
        assert_eq!(metrics.rating.mean, 1.666667);
        assert_eq!(metrics.rating.variance, 0.333333);
    }

    #[test]
    fn test_empty_input() {
        let metrics = compute_advanced_metrics(&[]);
        assert!(metrics.rating.is_zero());
        assert!(metrics.polarity.is_zero());
    }
}
