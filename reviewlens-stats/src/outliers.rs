//! Box-plot whiskers
//!
//! Splits a sample with the Tukey fences `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]` into
//! the range covered by the whiskers and the fliers drawn beyond them.

use crate::percentiles::Quartiles;

/// Fence distance from the box, in multiples of the IQR
pub const WHISKER_IQR: f64 = 1.5;

/// Whisker ends and fliers of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Whiskers {
    /// Smallest sample inside the fences
    pub low: f64,
    /// Largest sample inside the fences
    pub high: f64,
    /// Samples outside the fences, in input order
    pub fliers: Vec<f64>,
}

/// Whiskers for `samples` given their quartiles
///
/// When no sample falls inside the fences the whiskers collapse onto the box.
///
/// # Examples
///
/// ```
/// # use reviewlens_stats::{compute_quartiles, iqr_whiskers};
/// let lengths = vec![10.0, 12.0, 11.0, 13.0, 400.0];
/// let whiskers = iqr_whiskers(&lengths, &compute_quartiles(&lengths));
/// assert_eq!(whiskers.fliers, vec![400.0]);
/// assert_eq!(whiskers.high, 13.0);
/// ```
pub fn iqr_whiskers(samples: &[f64], quartiles: &Quartiles) -> Whiskers {
    let lower_fence = quartiles.q1 - WHISKER_IQR * quartiles.iqr();
    let upper_fence = quartiles.q3 + WHISKER_IQR * quartiles.iqr();

    let mut low: Option<f64> = None;
    let mut high: Option<f64> = None;
    let mut fliers = Vec::new();

    for &sample in samples {
        if sample < lower_fence || sample > upper_fence {
            fliers.push(sample);
        } else {
            low = Some(low.map_or(sample, |l| l.min(sample)));
            high = Some(high.map_or(sample, |h| h.max(sample)));
        }
    }

    Whiskers {
        low: low.unwrap_or(quartiles.q1),
        high: high.unwrap_or(quartiles.q3),
        fliers,
    }
}
