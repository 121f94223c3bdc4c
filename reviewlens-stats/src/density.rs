//! Gaussian Kernel Density Estimation
//!
//! Smoothed density curve for the rating-spread chart. Bandwidth follows
//! Scott's rule: `h = s * n^(-1/5)` with `s` the sample standard deviation.

use crate::moments::compute_moments;
use reviewlens_core::distinct_count;
use std::f64::consts::PI;

/// `points` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Scott's-rule bandwidth, `None` when the sample cannot support a density
pub fn scott_bandwidth(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 || distinct_count(samples) < 2 {
        return None;
    }
    let std = compute_moments(samples).std;
    let h = std * (samples.len() as f64).powf(-0.2);
    (h.is_finite() && h > 0.0).then_some(h)
}

/// Evaluate the Gaussian KDE of `samples` at each point of `grid`
///
/// Returns `None` for fewer than two distinct values, since a single
/// repeated value has no spread to estimate from, and for an empty grid.
pub fn gaussian_kde(samples: &[f64], grid: &[f64]) -> Option<Vec<f64>> {
    if grid.is_empty() {
        return None;
    }
    let h = scott_bandwidth(samples)?;
    let norm = 1.0 / (samples.len() as f64 * h * (2.0 * PI).sqrt());

    Some(
        grid.iter()
            .map(|&x| {
                let sum: f64 = samples
                    .iter()
                    .map(|&xi| {
                        let z = (x - xi) / h;
                        (-0.5 * z * z).exp()
                    })
                    .sum();
                sum * norm
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }

    #[test]
    fn test_constant_sample_has_no_density() {
        assert!(gaussian_kde(&[4.0, 4.0, 4.0], &[4.0]).is_none());
        assert!(gaussian_kde(&[3.0], &[3.0]).is_none());
        assert!(scott_bandwidth(&[]).is_none());
    }

    #[test]
    fn test_empty_grid_has_no_density() {
        assert!(gaussian_kde(&[1.0, 2.0, 5.0], &[]).is_none());
    }

    #[test]
    fn test_density_integrates_to_one() {
        let samples = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0];
        let grid = linspace(-10.0, 16.0, 2601);
        let density = gaussian_kde(&samples, &grid).unwrap();
        let step = grid[1] - grid[0];
        let area: f64 = density.iter().sum::<f64>() * step;
        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_density_peaks_near_mode() {
        let samples = [4.0, 4.0, 4.0, 5.0, 1.0];
        let grid = linspace(1.0, 5.0, 5);
        let density = gaussian_kde(&samples, &grid).unwrap();
        let peak = density
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(grid[peak], 4.0);
    }
}
