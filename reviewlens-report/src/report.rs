//! Report Data Structures

use crate::charts::{ChartArtifact, ChartData, ChartKind};
use chrono::{DateTime, Utc};
use reviewlens_core::STAR_COUNT;
use reviewlens_stats::{
    AdvancedMetrics, CorrelationSummary, Correlations, DescriptiveStats, SentimentDistribution,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Version of the report layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete analytics report for one review collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Provenance of the report
    pub meta: ReportMeta,
    /// Totals, sentiment tallies, average rating and star histogram
    pub stats: DescriptiveStats,
    /// Five-level polarity buckets
    pub sentiment_distribution: SentimentDistribution,
    /// Average polarity per star on a 0-100 scale, index 0 = 1★
    pub sentiment_by_rating: [f64; STAR_COUNT],
    /// Moment metrics of ratings and polarities
    pub metrics: AdvancedMetrics,
    /// Rating/polarity and rating/length correlations
    pub correlations: ReportCorrelations,
    /// Chart datasets, empty when charts are disabled
    pub charts: Vec<ChartSummary>,
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Layout version, see [`SCHEMA_VERSION`]
    pub schema_version: u32,
    /// Version of the tool that produced the report
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Input file the records were loaded from
    pub source: Option<String>,
    /// Number of records analysed
    pub record_count: usize,
}

impl ReportMeta {
    /// Metadata stamped with the current time
    pub fn new(version: impl Into<String>, source: Option<String>, record_count: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: version.into(),
            timestamp: Utc::now(),
            source,
            record_count,
        }
    }
}

/// Display form of both correlation pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCorrelations {
    /// Rating vs. polarity
    pub rating_sentiment: CorrelationSummary,
    /// Rating vs. text length
    pub rating_length: CorrelationSummary,
}

impl From<&Correlations> for ReportCorrelations {
    fn from(correlations: &Correlations) -> Self {
        Self {
            rating_sentiment: CorrelationSummary::from(&correlations.rating_sentiment),
            rating_length: CorrelationSummary::from(&correlations.rating_length),
        }
    }
}

/// Chart entry in the report: the dataset, without the image bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    /// Which chart this is
    pub kind: ChartKind,
    /// False when the chart is a placeholder
    pub has_data: bool,
    /// Placeholder message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Where the PNG was written, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Dataset behind the image, `None` for placeholders
    pub data: Option<ChartData>,
}

impl ChartSummary {
    /// Summarise an artifact, recording where its PNG was written
    pub fn from_artifact(artifact: &ChartArtifact, path: Option<PathBuf>) -> Self {
        Self {
            kind: artifact.kind,
            has_data: artifact.has_data,
            message: artifact.message.clone(),
            path,
            data: artifact.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_stats::{CorrelationStatus, NO_DATA_TEXT};

    #[test]
    fn test_meta_defaults() {
        let meta = ReportMeta::new("0.1.0", Some("reviews.json".into()), 3);
        assert_eq!(meta.schema_version, SCHEMA_VERSION);
        assert_eq!(meta.record_count, 3);
    }

    #[test]
    fn test_no_data_correlations() {
        let corr = ReportCorrelations::from(&Correlations::no_data());
        assert_eq!(corr.rating_sentiment.r, 0.0);
        assert_eq!(corr.rating_sentiment.p, 0.0);
        assert_eq!(corr.rating_length.text, NO_DATA_TEXT);
        assert_eq!(corr.rating_length.status, CorrelationStatus::NoData);
    }
}
