//! Statistics Computation
//!
//! Runs every aggregate over one review collection. Each stage is a pure
//! function of the records; none depends on another's output.

use reviewlens_core::{ReviewRecord, STAR_COUNT};
use reviewlens_stats::{
    AdvancedMetrics, Correlations, DescriptiveStats, SentimentDistribution,
    compute_advanced_metrics, compute_correlations, compute_descriptive_stats,
    compute_sentiment_by_rating, compute_sentiment_distribution,
};

/// Every aggregate of one review collection
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAnalytics {
    /// Counts, sentiment tallies, average rating, star histogram
    pub stats: DescriptiveStats,
    /// Five-level polarity buckets
    pub sentiment_distribution: SentimentDistribution,
    /// Average polarity per star on a 0-100 scale
    pub sentiment_by_rating: [f64; STAR_COUNT],
    /// Moment metrics for ratings and polarities
    pub metrics: AdvancedMetrics,
    /// Rating/polarity and rating/length correlations
    pub correlations: Correlations,
}

/// Compute all aggregates for a review collection
pub fn compute_analytics(records: &[ReviewRecord]) -> ReviewAnalytics {
    let analytics = ReviewAnalytics {
        stats: compute_descriptive_stats(records),
        sentiment_distribution: compute_sentiment_distribution(records),
        sentiment_by_rating: compute_sentiment_by_rating(records),
        metrics: compute_advanced_metrics(records),
        correlations: compute_correlations(records),
    };

    tracing::debug!(
        records = records.len(),
        avg_rating = analytics.stats.avg_rating,
        rating_sentiment = %analytics.correlations.rating_sentiment.text(),
        rating_length = %analytics.correlations.rating_length.text(),
        "computed analytics"
    );
    analytics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario() {
        let records = vec![
            ReviewRecord::new(5.0, "Positive", 0.8, "x".repeat(50)),
            ReviewRecord::new(1.0, "Negative", -0.6, "x".repeat(10)),
            ReviewRecord::new(3.0, "Neutral", 0.0, "x".repeat(30)),
        ];
        let analytics = compute_analytics(&records);

        assert_eq!(analytics.stats.avg_rating, 3.0);
        assert_eq!(analytics.stats.stars, [1, 0, 1, 0, 1]);
        assert_eq!(analytics.sentiment_distribution.very_positive, 1);
        assert_eq!(analytics.sentiment_distribution.very_negative, 1);
        assert_eq!(analytics.sentiment_distribution.neutral, 1);
        assert!(analytics.correlations.rating_sentiment.r() > 0.7);
    }

    #[test]
    fn test_empty() {
        let analytics = compute_analytics(&[]);
        assert_eq!(analytics.stats, DescriptiveStats::default());
        assert_eq!(analytics.correlations, Correlations::no_data());
    }
}
