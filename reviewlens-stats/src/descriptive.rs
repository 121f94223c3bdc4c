//! Descriptive Statistics
//!
//! Counts, sentiment tallies, average rating and the star histogram.

use reviewlens_core::{ReviewRecord, STAR_COUNT, Sentiment, round_to};
use serde::{Deserialize, Serialize};

/// Headline numbers for a review collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of records
    pub total: usize,
    /// Records labelled positive
    pub positive: usize,
    /// Records labelled negative
    pub negative: usize,
    /// Records labelled neutral
    pub neutral: usize,
    /// Mean rating (absent ratings count as 0), 2 decimals
    pub avg_rating: f64,
    /// Record count per star, index 0 = 1★
    pub stars: [usize; STAR_COUNT],
}

impl DescriptiveStats {
    /// Records whose label matched none of the three sentiments
    pub fn unlabelled(&self) -> usize {
        self.total - (self.positive + self.negative + self.neutral)
    }

    /// Records that landed in a star bucket
    pub fn starred(&self) -> usize {
        self.stars.iter().sum()
    }
}

/// Compute descriptive statistics in a single pass
pub fn compute_descriptive_stats(records: &[ReviewRecord]) -> DescriptiveStats {
    let mut stats = DescriptiveStats {
        total: records.len(),
        ..Default::default()
    };
    let mut rating_sum = 0.0;

    for record in records {
        match record.sentiment_label() {
            Some(Sentiment::Positive) => stats.positive += 1,
            Some(Sentiment::Negative) => stats.negative += 1,
            Some(Sentiment::Neutral) => stats.neutral += 1,
            None => {}
        }

        rating_sum += record.rating_or_zero();

        if let Some(star) = record.star() {
            stats.stars[(star - 1) as usize] += 1;
        }
    }

    if stats.total > 0 {
        stats.avg_rating = round_to(rating_sum / stats.total as f64, 2);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario() {
        let records = vec![
            ReviewRecord::new(5.0, "Positive", 0.8, "a".repeat(50)),
            ReviewRecord::new(1.0, "NEGATIVE", -0.6, "b".repeat(10)),
            ReviewRecord::new(3.0, "neutral", 0.0, "c".repeat(30)),
        ];
        let stats = compute_descriptive_stats(&records);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.positive, 1);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.avg_rating, 3.0);
        assert_eq!(stats.stars, [1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_unmatched_labels_excluded() {
        let records = vec![
            ReviewRecord::default().with_sentiment("mixed").with_rating(4.0),
            ReviewRecord::default().with_rating(2.0),
            ReviewRecord::default().with_sentiment("Positive").with_rating(5.0),
        ];
        let stats = compute_descriptive_stats(&records);

        assert_eq!(stats.positive + stats.negative + stats.neutral, 1);
        assert_eq!(stats.unlabelled(), 2);
        assert!(stats.positive + stats.negative + stats.neutral <= stats.total);
    }

    #[test]
    fn test_absent_rating_counts_as_zero_in_average() {
        let records = vec![
            ReviewRecord::default().with_rating(4.0),
            ReviewRecord::default(),
            ReviewRecord::default().with_rating("not a number"),
        ];
        let stats = compute_descriptive_stats(&records);

        assert_eq!(stats.avg_rating, 1.33);
        assert_eq!(stats.stars, [0, 0, 0, 1, 0]);
        assert!(stats.starred() <= stats.total);
    }

    #[test]
    fn test_fractional_and_out_of_range_ratings() {
        let records = vec![
            ReviewRecord::default().with_rating(4.6),
            ReviewRecord::default().with_rating(1.2),
            ReviewRecord::default().with_rating(0.2),
            ReviewRecord::default().with_rating(9.0),
        ];
        let stats = compute_descriptive_stats(&records);

        assert_eq!(stats.stars, [1, 0, 0, 0, 1]);
        assert_eq!(stats.starred(), 2);
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_descriptive_stats(&[]);
        assert_eq!(stats, DescriptiveStats::default());
        assert_eq!(stats.avg_rating, 0.0);
    }

    #[test]
    fn test_average_rating_ties_round_to_even() {
        let records: Vec<ReviewRecord> = [1.0, 1.0, 1.0, 1.5]
            .into_iter()
            .map(|r| ReviewRecord::default().with_rating(r))
            .collect();
        // 4.5 / 4 = 1.125
        assert_eq!(compute_descriptive_stats(&records).avg_rating, 1.12);
    }
}
