//! Per-review Series
//!
//! Flattens a record collection into the numeric series consumed by the
//! moment, correlation and chart stages. Each series applies its own
//! nullability rule; see the field docs.

use crate::record::{ReviewRecord, STAR_COUNT};

/// Numeric series derived from one record collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSeries {
    /// Well-formed ratings (absent and malformed excluded)
    pub ratings: Vec<f64>,
    /// Polarity scores (absent excluded)
    pub polarities: Vec<f64>,
    /// Character lengths of non-empty review texts
    pub text_lengths: Vec<f64>,
    /// Text lengths grouped by truncated star rating, index 0 = 1★.
    /// Only records with a rating in [1, 5] and non-empty text contribute.
    pub lengths_by_star: [Vec<f64>; STAR_COUNT],
}

impl ReviewSeries {
    /// Extract every series in a single pass
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        let mut series = ReviewSeries::default();

        for record in records {
            if let Some(rating) = record.rating_value() {
                series.ratings.push(rating);
            }
            if let Some(polarity) = record.polarity_value() {
                series.polarities.push(polarity);
            }
            if record.has_text() {
                let length = record.text_length() as f64;
                series.text_lengths.push(length);
                if let Some(star) = record.truncated_star() {
                    series.lengths_by_star[(star - 1) as usize].push(length);
                }
            }
        }

        series
    }

    /// Whether any box of the length-by-rating plot has data
    pub fn has_lengths_by_star(&self) -> bool {
        self.lengths_by_star.iter().any(|b| !b.is_empty())
    }
}

/// Paired observations for a two-variable statistic.
///
/// Records missing either side are dropped from the pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairedSeries {
    /// First variable
    pub x: Vec<f64>,
    /// Second variable
    pub y: Vec<f64>,
}

impl PairedSeries {
    /// Build pairs from two per-record extractors
    pub fn from_records<FX, FY>(records: &[ReviewRecord], fx: FX, fy: FY) -> Self
    where
        FX: Fn(&ReviewRecord) -> Option<f64>,
        FY: Fn(&ReviewRecord) -> Option<f64>,
    {
        let mut pairs = PairedSeries::default();
        for record in records {
            if let (Some(x), Some(y)) = (fx(record), fy(record)) {
                pairs.x.push(x);
                pairs.y.push(y);
            }
        }
        pairs
    }

    /// Number of complete pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no complete pairs
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
