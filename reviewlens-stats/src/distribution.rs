//! Sentiment Distribution
//!
//! Five-level polarity bands and per-star average polarity.
//! Both stages read an absent polarity as 0 (neutral).

use reviewlens_core::{ReviewRecord, STAR_COUNT, round_to};
use serde::{Deserialize, Serialize};

/// One of the five polarity bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityBand {
    /// p < -0.5
    VeryNegative,
    /// -0.5 <= p < -0.1
    Negative,
    /// -0.1 <= p <= 0.1
    Neutral,
    /// 0.1 < p <= 0.5
    Positive,
    /// p > 0.5
    VeryPositive,
}

impl PolarityBand {
    /// Place a polarity score in exactly one band
    pub fn classify(polarity: f64) -> Self {
        if polarity > 0.5 {
            PolarityBand::VeryPositive
        } else if polarity > 0.1 {
            PolarityBand::Positive
        } else if polarity >= -0.1 {
            PolarityBand::Neutral
        } else if polarity >= -0.5 {
            PolarityBand::Negative
        } else {
            PolarityBand::VeryNegative
        }
    }
}

/// Record counts per polarity band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// p > 0.5
    pub very_positive: usize,
    /// 0.1 < p <= 0.5
    pub positive: usize,
    /// -0.1 <= p <= 0.1
    pub neutral: usize,
    /// -0.5 <= p < -0.1
    pub negative: usize,
    /// p < -0.5
    pub very_negative: usize,
}

impl SentimentDistribution {
    /// Count for a single band
    pub fn count(&self, band: PolarityBand) -> usize {
        match band {
            PolarityBand::VeryPositive => self.very_positive,
            PolarityBand::Positive => self.positive,
            PolarityBand::Neutral => self.neutral,
            PolarityBand::Negative => self.negative,
            PolarityBand::VeryNegative => self.very_negative,
        }
    }

    /// Sum over all bands (always equals the record count)
    pub fn total(&self) -> usize {
        self.very_positive + self.positive + self.neutral + self.negative + self.very_negative
    }

    fn add(&mut self, band: PolarityBand) {
        match band {
            PolarityBand::VeryPositive => self.very_positive += 1,
            PolarityBand::Positive => self.positive += 1,
            PolarityBand::Neutral => self.neutral += 1,
            PolarityBand::Negative => self.negative += 1,
            PolarityBand::VeryNegative => self.very_negative += 1,
        }
    }
}

/// Partition records into the five polarity bands
pub fn compute_sentiment_distribution(records: &[ReviewRecord]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for record in records {
        distribution.add(PolarityBand::classify(record.polarity_or_zero()));
    }
    distribution
}

/// Map a mean polarity from [-1, 1] onto [0, 100]
pub fn normalize_polarity(mean_polarity: f64) -> f64 {
    (mean_polarity + 1.0) * 50.0
}

/// Average polarity per star, rescaled to 0-100 and rounded to 1 decimal
///
/// Index 0 is 1★. Stars without records report 0.
pub fn compute_sentiment_by_rating(records: &[ReviewRecord]) -> [f64; STAR_COUNT] {
    let mut sums = [0.0f64; STAR_COUNT];
    let mut counts = [0usize; STAR_COUNT];

    for record in records {
        if let Some(star) = record.star() {
            let idx = (star - 1) as usize;
            sums[idx] += record.polarity_or_zero();
            counts[idx] += 1;
        }
    }

    let mut averages = [0.0f64; STAR_COUNT];
    for (idx, avg) in averages.iter_mut().enumerate() {
        if counts[idx] > 0 {
            *avg = round_to(normalize_polarity(sums[idx] / counts[idx] as f64), 1);
        }
    }
    averages
}
