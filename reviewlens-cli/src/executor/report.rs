//! Report Building

use super::statistics::ReviewAnalytics;
use reviewlens_report::{AnalyticsReport, ChartSummary, ReportCorrelations, ReportMeta};

/// Assemble the report from computed analytics and chart summaries
pub fn build_report(
    analytics: &ReviewAnalytics,
    charts: Vec<ChartSummary>,
    source: Option<String>,
) -> AnalyticsReport {
    AnalyticsReport {
        meta: ReportMeta::new(env!("CARGO_PKG_VERSION"), source, analytics.stats.total),
        stats: analytics.stats.clone(),
        sentiment_distribution: analytics.sentiment_distribution,
        sentiment_by_rating: analytics.sentiment_by_rating,
        metrics: analytics.metrics,
        correlations: ReportCorrelations::from(&analytics.correlations),
        charts,
    }
}
