#![warn(missing_docs)]
//! # ReviewLens
//!
//! Aggregate analytics over product-review records for a dashboard.
//!
//! ReviewLens turns a collection of reviews (rating, text, sentiment label,
//! polarity score) into:
//! - **Descriptive stats**: totals, sentiment tallies, average rating, star histogram
//! - **Distribution buckets**: five polarity levels and per-star average sentiment (0-100)
//! - **Moment metrics**: mean, median, std, variance, skewness and kurtosis with small-sample guards
//! - **Correlations**: Pearson `r` and two-tailed `p` for rating/polarity and rating/length
//! - **Charts**: length and polarity histograms, length-by-rating box plot, rating spread
//!
//! Every computation is a pure function of the record slice. Missing or
//! malformed fields degrade the result (zeros, skipped buckets, named
//! terminal states) and never fail a batch.
//!
//! ## Quick Start
//!
//! ```
//! use reviewlens::prelude::*;
//!
//! let reviews = vec![
//!     ReviewRecord::new(5.0, "Positive", 0.8, "Works great"),
//!     ReviewRecord::new(1.0, "Negative", -0.6, "Broke"),
//!     ReviewRecord::new(3.0, "Neutral", 0.0, "Fine I guess"),
//! ];
//!
//! let stats = compute_descriptive_stats(&reviews);
//! assert_eq!(stats.avg_rating, 3.0);
//! assert_eq!(stats.stars, [1, 0, 1, 0, 1]);
//!
//! let corr = compute_correlations(&reviews);
//! assert_eq!(corr.rating_sentiment.text(), "Strong positive relationship");
//! ```

// Re-export the record model
pub use reviewlens_core::{
    MAX_STAR, MIN_STAR, PairedSeries, Rating, ReviewRecord, ReviewSeries, STAR_COUNT, Sentiment,
};

// Re-export the statistics engine
pub use reviewlens_stats::{
    AdvancedMetrics, CorrelationOutcome, CorrelationStatus, CorrelationStrength,
    CorrelationSummary, Correlations, DescriptiveStats, MomentMetrics, PolarityBand,
    SentimentDistribution, compute_advanced_metrics, compute_correlations,
    compute_descriptive_stats, compute_sentiment_by_rating, compute_sentiment_distribution,
    describe_relationship,
};

// Re-export reporting and charts
pub use reviewlens_report::{
    AnalyticsReport, ChartArtifact, ChartData, ChartKind, ChartOptions, ChartSummary,
    NO_DATA_MESSAGE, OutputFormat, RenderError, generate_json_report, render_all, render_chart,
};

// Re-export the pipeline
pub use reviewlens_cli::{
    AnalysisSettings, InputError, InputFormat, ReviewAnalytics, ReviewLensConfig, analyze,
    build_report, compute_analytics, format_human_output, load_reviews,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ChartKind, ReviewRecord, ReviewSeries, compute_advanced_metrics, compute_analytics,
        compute_correlations, compute_descriptive_stats, compute_sentiment_by_rating,
        compute_sentiment_distribution, render_chart,
    };
}

/// Run the ReviewLens CLI.
///
/// ```no_run
/// fn main() -> anyhow::Result<()> {
///     reviewlens::run()
/// }
/// ```
pub use reviewlens_cli::run;
