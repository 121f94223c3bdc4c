//! Output Formatting
//!
//! Human-readable output formatting for analytics reports.
//!
//! Generates terminal-friendly output with:
//! - Headline counts and the star histogram
//! - Polarity buckets and per-star sentiment
//! - Moment metrics for ratings and polarities
//! - Correlations and the chart list

use reviewlens_report::AnalyticsReport;
use reviewlens_stats::MomentMetrics;

const BAR_WIDTH: usize = 30;

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat((count * BAR_WIDTH).div_ceil(max))
}

fn moments_line(label: &str, m: &MomentMetrics) -> String {
    format!(
        "  {:<9} mean {:>8.3}  median {:>8.3}  std {:>8.3}  var {:>8.3}  skew {:>7.3}  kurt {:>7.3}\n",
        label, m.mean, m.median, m.std, m.variance, m.skewness, m.kurtosis
    )
}

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &AnalyticsReport) -> String {
    let mut output = String::new();
    let stats = &report.stats;

    output.push('\n');
    output.push_str("ReviewLens Analytics\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    if let Some(source) = &report.meta.source {
        output.push_str(&format!("Source: {}\n", source));
    }
    output.push_str(&format!(
        "Reviews: {}  (positive {}, negative {}, neutral {})\n",
        stats.total, stats.positive, stats.negative, stats.neutral
    ));
    output.push_str(&format!("Average rating: {:.2}\n\n", stats.avg_rating));

    // Star histogram
    output.push_str("Ratings\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    let max_stars = stats.stars.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.stars.iter().enumerate().rev() {
        output.push_str(&format!(
            "  {}★ {:>6}  {:<width$}  sentiment {:>5.1}\n",
            i + 1,
            count,
            bar(count, max_stars),
            report.sentiment_by_rating[i],
            width = BAR_WIDTH
        ));
    }
    output.push('\n');

    // Polarity buckets
    let dist = &report.sentiment_distribution;
    output.push_str("Polarity\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    let buckets = [
        ("very positive", dist.very_positive),
        ("positive", dist.positive),
        ("neutral", dist.neutral),
        ("negative", dist.negative),
        ("very negative", dist.very_negative),
    ];
    let max_bucket = buckets.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in buckets {
        output.push_str(&format!(
            "  {:<14} {:>6}  {}\n",
            label,
            count,
            bar(count, max_bucket)
        ));
    }
    output.push('\n');

    // Moments
    output.push_str("Metrics\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&moments_line("rating", &report.metrics.rating));
    output.push_str(&moments_line("polarity", &report.metrics.polarity));
    output.push('\n');

    // Correlations
    output.push_str("Correlations\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for (label, corr) in [
        ("rating ~ polarity", &report.correlations.rating_sentiment),
        ("rating ~ length", &report.correlations.rating_length),
    ] {
        output.push_str(&format!(
            "  {:<18} r = {:>5.2}  p = {:.4}  {}\n",
            label, corr.r, corr.p, corr.text
        ));
    }

    if !report.charts.is_empty() {
        output.push('\n');
        output.push_str("Charts\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for chart in &report.charts {
            let icon = if chart.has_data { "✓" } else { "⊘" };
            let location = match (&chart.path, &chart.message) {
                (Some(path), _) if chart.has_data => path.display().to_string(),
                (Some(path), Some(msg)) => format!("{} ({})", path.display(), msg),
                (None, Some(msg)) => msg.clone(),
                _ => String::new(),
            };
            output.push_str(&format!("  {} {:<20} {}\n", icon, chart.kind, location));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{build_report, compute_analytics};
    use reviewlens_core::ReviewRecord;
    use reviewlens_report::{ChartKind, ChartSummary};

    #[test]
    fn test_human_output_sections() {
        let records = vec![
            ReviewRecord::new(5.0, "Positive", 0.8, "x".repeat(50)),
            ReviewRecord::new(1.0, "Negative", -0.6, "x".repeat(10)),
            ReviewRecord::new(3.0, "Neutral", 0.0, "x".repeat(30)),
        ];
        let report = build_report(&compute_analytics(&records), Vec::new(), None);
        let text = format_human_output(&report);

        assert!(text.contains("ReviewLens Analytics"));
        assert!(text.contains("Reviews: 3"));
        assert!(text.contains("Average rating: 3.00"));
        assert!(text.contains("Strong positive relationship"));
        assert!(!text.contains("Charts"));
    }

    #[test]
    fn test_placeholder_chart_line() {
        let mut report = build_report(&compute_analytics(&[]), Vec::new(), None);
        report.charts.push(ChartSummary {
            kind: ChartKind::SentimentPolarity,
            has_data: false,
            message: Some("No Data Available".into()),
            path: None,
            data: None,
        });
        let text = format_human_output(&report);
        assert!(text.contains("⊘ sentiment_polarity"));
        assert!(text.contains("No Data Available"));
        assert!(text.contains("No data available"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(5, 5).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 30).chars().count(), 1);
    }
}
