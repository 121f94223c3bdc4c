//! Histogram Binning
//!
//! Uniform bins over either the observed range or a fixed range. Every bin
//! is half-open `[lower, upper)` except the last, which also includes its
//! upper edge. Values outside a fixed range are not counted.

use serde::{Deserialize, Serialize};

/// One histogram bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge (inclusive only for the last bin)
    pub upper: f64,
    /// Number of values in the bin
    pub count: usize,
}

impl HistogramBin {
    /// Bin midpoint
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Binned distribution of a numeric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins in ascending order
    pub bins: Vec<HistogramBin>,
    /// Lower edge of the first bin
    pub min: f64,
    /// Upper edge of the last bin
    pub max: f64,
    /// Values that fell outside the range
    pub excluded: usize,
}

impl Histogram {
    /// Total count over all bins
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest single bin count
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Width of each bin
    pub fn bin_width(&self) -> f64 {
        if self.bins.is_empty() {
            0.0
        } else {
            (self.max - self.min) / self.bins.len() as f64
        }
    }
}

/// Compute a histogram with `bin_count` uniform bins
///
/// Without a fixed `range` the bins span the observed minimum and maximum;
/// a degenerate range (single distinct value, or no values) is widened by
/// 0.5 on either side.
///
/// # Examples
///
/// ```
/// # use reviewlens_stats::compute_histogram;
/// let polarities = [-0.9, 0.0, 0.05, 0.95];
/// let hist = compute_histogram(&polarities, 4, Some((-1.0, 1.0)));
/// let counts: Vec<usize> = hist.bins.iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![1, 0, 2, 1]);
/// ```
pub fn compute_histogram(values: &[f64], bin_count: usize, range: Option<(f64, f64)>) -> Histogram {
    let bin_count = bin_count.max(1);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let (mut lo, mut hi) = match range {
        Some(r) => r,
        None if finite.is_empty() => (0.0, 1.0),
        None => {
            let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (lo, hi)
        }
    };
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bin_count {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    let mut excluded = values.len() - finite.len();
    for v in finite {
        if v < lo || v > hi {
            excluded += 1;
            continue;
        }
        let idx = (((v - lo) / width).floor() as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    Histogram {
        bins,
        min: lo,
        max: hi,
        excluded,
    }
}
