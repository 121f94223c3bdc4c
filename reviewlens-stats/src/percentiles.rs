//! Percentile Computation
//!
//! Linear interpolation between nearest ranks, matching the default
//! quantile definition used by most dashboards (numpy's `linear`).

/// Lower quartile, median and upper quartile of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute a single percentile from samples
///
/// Uses linear interpolation between nearest ranks.
///
/// # Examples
///
/// ```
/// # use reviewlens_stats::compute_percentile;
/// let lengths = vec![10.0, 30.0, 50.0];
/// assert_eq!(compute_percentile(&lengths, 50.0), 30.0);
/// assert_eq!(compute_percentile(&lengths, 25.0), 20.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    if samples.len() == 1 {
        return samples[0];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let p = percentile / 100.0;

    let rank = p * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Median of a sample (mean of the two middle values for even counts)
pub fn compute_median(samples: &[f64]) -> f64 {
    compute_percentile(samples, 50.0)
}

/// Compute the quartiles used by box plots
pub fn compute_quartiles(samples: &[f64]) -> Quartiles {
    Quartiles {
        q1: compute_percentile(samples, 25.0),
        median: compute_percentile(samples, 50.0),
        q3: compute_percentile(samples, 75.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let samples = vec![5.0, 1.0, 3.0];
        assert!((compute_median(&samples) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_even_median_averages_middle() {
        let samples = vec![1.0, 2.0, 4.0, 5.0];
        assert!((compute_median(&samples) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quartiles() {
        let samples: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        let q = compute_quartiles(&samples);

        assert!((q.q1 - 25.75).abs() < 1e-9);
        assert!((q.q3 - 75.25).abs() < 1e-9);
        assert!((q.iqr() - 49.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample() {
        let samples = vec![42.0];
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_samples() {
        let samples: Vec<f64> = Vec::new();
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 0.0).abs() < f64::EPSILON);
    }
}
