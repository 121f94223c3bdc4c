#![warn(missing_docs)]
//! ReviewLens Statistical Engine
//!
//! Pure aggregate computations over a review collection:
//! - Descriptive tallies and the star histogram
//! - Five-level polarity buckets and per-star average polarity
//! - Moment metrics with small-sample guards
//! - Pearson correlation with two-tailed p-values and strength labels
//! - Percentiles, IQR whiskers, histogram binning and Gaussian KDE for chart datasets
//!
//! Nothing here fails on degenerate input: empty or constant series map to
//! named zero states instead of errors.

mod correlation;
mod density;
mod descriptive;
mod distribution;
mod histogram;
mod moments;
mod outliers;
mod percentiles;

pub use correlation::{
    CALCULATION_ERROR_TEXT, CorrelationDirection, CorrelationError, CorrelationOutcome,
    CorrelationStatus, CorrelationStrength, CorrelationSummary, Correlations,
    INSUFFICIENT_VARIANCE_TEXT, NO_DATA_TEXT, P_DECIMALS, PearsonResult, R_DECIMALS,
    compute_correlations, correlate, describe_relationship, pearson,
};
pub use density::{gaussian_kde, linspace, scott_bandwidth};
pub use descriptive::{DescriptiveStats, compute_descriptive_stats};
pub use distribution::{
    PolarityBand, SentimentDistribution, compute_sentiment_by_rating,
    compute_sentiment_distribution, normalize_polarity,
};
pub use histogram::{Histogram, HistogramBin, compute_histogram};
pub use moments::{
    AdvancedMetrics, MIN_MOMENT_SAMPLES, MOMENT_DECIMALS, MomentMetrics,
    compute_advanced_metrics, compute_moments,
};
pub use outliers::{WHISKER_IQR, Whiskers, iqr_whiskers};
pub use percentiles::{Quartiles, compute_median, compute_percentile, compute_quartiles};

/// Default number of bins for the length and polarity histograms
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Default number of points sampled along the rating density curve
pub const DEFAULT_DENSITY_POINTS: usize = 100;
