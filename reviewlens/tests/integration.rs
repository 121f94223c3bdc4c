//! Integration tests for ReviewLens
//!
//! These tests drive the public API end to end: records in, report and
//! charts out.

use reviewlens::{
    AnalysisSettings, ChartData, ChartKind, ChartOptions, CorrelationStatus, OutputFormat,
    ReviewLensConfig, ReviewRecord, ReviewSeries, analyze, compute_advanced_metrics,
    compute_analytics, compute_correlations, compute_descriptive_stats,
    compute_sentiment_by_rating, compute_sentiment_distribution, generate_json_report,
    load_reviews, render_all,
};
use std::io::Write;

fn scenario() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord::new(5.0, "Positive", 0.8, "x".repeat(50)),
        ReviewRecord::new(1.0, "Negative", -0.6, "x".repeat(10)),
        ReviewRecord::new(3.0, "Neutral", 0.0, "x".repeat(30)),
    ]
}

fn small_charts() -> ChartOptions {
    ChartOptions {
        width: 320,
        height: 200,
        ..ChartOptions::default()
    }
}

/// Three-review scenario across every component
#[test]
fn test_three_review_scenario() {
    let records = scenario();

    let stats = compute_descriptive_stats(&records);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.avg_rating, 3.0);
    assert_eq!(stats.stars, [1, 0, 1, 0, 1]);
    assert_eq!((stats.positive, stats.negative, stats.neutral), (1, 1, 1));

    let dist = compute_sentiment_distribution(&records);
    assert_eq!(dist.very_positive, 1);
    assert_eq!(dist.very_negative, 1);
    assert_eq!(dist.neutral, 1);
    assert_eq!(dist.positive, 0);
    assert_eq!(dist.negative, 0);

    let corr = compute_correlations(&records);
    assert!(corr.rating_sentiment.is_computed());
    assert!(corr.rating_sentiment.r() > 0.7);
    assert_eq!(corr.rating_sentiment.text(), "Strong positive relationship");
    assert_eq!(corr.rating_length.r(), 1.0);

    let metrics = compute_advanced_metrics(&records);
    assert!((metrics.rating.mean - 3.0).abs() < 1e-9);
    assert!((metrics.rating.std - 2.0).abs() < 1e-9);
}

/// Aggregate invariants over messy input
#[test]
fn test_invariants_with_malformed_fields() {
    let json = r#"[
        {"rating": 4.6, "sentiment": "POSITIVE", "polarity": 0.7, "review_text": "good"},
        {"rating": "2", "sentiment": "negative", "polarity": -0.2},
        {"rating": "broken", "sentiment": "mixed", "polarity": null, "review_text": ""},
        {"rating": 9, "sentiment": "Neutral", "review_title": "ignored"},
        {}
    ]"#;
    let records: Vec<ReviewRecord> = serde_json::from_str(json).unwrap();

    let stats = compute_descriptive_stats(&records);
    assert_eq!(stats.total, 5);
    assert!(stats.positive + stats.negative + stats.neutral <= stats.total);
    assert_eq!(stats.stars.iter().sum::<usize>(), 2);
    assert_eq!(stats.stars, [0, 1, 0, 0, 1]);
    // (4.6 + 2 + 0 + 9 + 0) / 5
    assert_eq!(stats.avg_rating, 3.12);

    let dist = compute_sentiment_distribution(&records);
    assert_eq!(dist.total(), stats.total);
    assert_eq!(dist.very_positive, 1);
    assert_eq!(dist.negative, 1);
    assert_eq!(dist.neutral, 3);

    let by_rating = compute_sentiment_by_rating(&records);
    assert_eq!(by_rating[1], 40.0);
    assert_eq!(by_rating[4], 85.0);
    assert_eq!(by_rating[0], 0.0);
}

/// Empty input yields every zero / placeholder structure
#[test]
fn test_empty_input() {
    let analytics = compute_analytics(&[]);
    assert_eq!(analytics.stats.total, 0);
    assert_eq!(analytics.stats.avg_rating, 0.0);
    assert_eq!(analytics.sentiment_distribution.total(), 0);
    assert_eq!(analytics.sentiment_by_rating, [0.0; 5]);
    assert!(analytics.metrics.rating.is_zero());
    assert!(analytics.metrics.polarity.is_zero());
    assert_eq!(analytics.correlations.rating_sentiment.text(), "No data available");
    assert_eq!(analytics.correlations.rating_length.p(), 0.0);

    let charts = render_all(&ReviewSeries::default(), &small_charts()).unwrap();
    assert_eq!(charts.len(), 4);
    assert!(charts.iter().all(|c| !c.has_data && !c.png.is_empty()));
}

/// A constant variable ends in the insufficient-variance state
#[test]
fn test_constant_rating_insufficient_variance() {
    let records: Vec<ReviewRecord> = [0.1, 0.5, -0.3]
        .iter()
        .map(|&p| ReviewRecord::new(4.0, "Positive", p, "same"))
        .collect();
    let analytics = compute_analytics(&records);

    for outcome in [
        &analytics.correlations.rating_sentiment,
        &analytics.correlations.rating_length,
    ] {
        assert_eq!(outcome.r(), 0.0);
        assert_eq!(outcome.p(), 0.0);
        assert_eq!(outcome.text(), "Insufficient variance");
    }
}

/// All ratings equal: spread chart has no density curve and no std markers
#[test]
fn test_degenerate_rating_spread() {
    let records: Vec<ReviewRecord> = (0..5)
        .map(|i| ReviewRecord::new(4.0, "Positive", 0.1 * i as f64, "text"))
        .collect();
    let series = ReviewSeries::from_records(&records);
    let charts = render_all(&series, &small_charts()).unwrap();

    let spread = charts
        .iter()
        .find(|c| c.kind == ChartKind::RatingSpread)
        .unwrap();
    assert!(spread.has_data);
    match &spread.data {
        Some(ChartData::RatingSpread(chart)) => {
            assert_eq!(chart.mean, 4.0);
            assert!(chart.density.is_none());
            assert!(chart.std_markers.is_none());
        }
        other => panic!("unexpected dataset: {:?}", other),
    }
}

/// Polarity-only records: length charts are placeholders, polarity chart is drawn
#[test]
fn test_partial_chart_degradation() {
    let records = vec![
        ReviewRecord::default().with_polarity(0.4),
        ReviewRecord::default().with_polarity(-0.9),
    ];
    let charts = render_all(&ReviewSeries::from_records(&records), &small_charts()).unwrap();
    let has_data: Vec<(ChartKind, bool)> = charts.iter().map(|c| (c.kind, c.has_data)).collect();

    assert_eq!(
        has_data,
        vec![
            (ChartKind::ReviewLength, false),
            (ChartKind::SentimentPolarity, true),
            (ChartKind::LengthByRating, false),
            (ChartKind::RatingSpread, false),
        ]
    );
}

/// JSON report carries every section and the written chart paths
#[test]
fn test_analyze_writes_charts_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let settings = AnalysisSettings {
        format: OutputFormat::Json,
        chart_options: small_charts(),
        chart_dir: Some(dir.path().join("charts")),
    };

    let report = analyze(&scenario(), &settings, Some("scenario.json".into())).unwrap();
    assert_eq!(report.charts.len(), 4);
    for chart in &report.charts {
        let path = chart.path.as_ref().unwrap();
        assert!(path.exists());
        assert!(chart.has_data);
    }
    assert_eq!(
        report.correlations.rating_sentiment.status,
        CorrelationStatus::Computed
    );

    let json = generate_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["meta"]["record_count"], 3);
    assert_eq!(value["stats"]["avg_rating"], 3.0);
    assert_eq!(value["sentiment_distribution"]["very_positive"], 1);
    assert_eq!(value["charts"][0]["kind"], "review_length");
    assert_eq!(value["charts"][3]["data"]["type"], "rating_spread");
}

/// CSV input through the loader and the default config
#[test]
fn test_csv_pipeline() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "rating,sentiment,polarity,review_text").unwrap();
    writeln!(file, "5,Positive,0.8,{}", "x".repeat(50)).unwrap();
    writeln!(file, "1,Negative,-0.6,{}", "x".repeat(10)).unwrap();
    writeln!(file, "3,Neutral,0.0,{}", "x".repeat(30)).unwrap();
    file.flush().unwrap();

    let records = load_reviews(file.path(), None).unwrap();
    assert_eq!(records, scenario());

    let config = ReviewLensConfig::default();
    let settings = AnalysisSettings {
        format: OutputFormat::Human,
        chart_options: config.chart_options(),
        chart_dir: None,
    };
    let report = analyze(&records, &settings, None).unwrap();
    assert!(report.charts.is_empty());
    assert_eq!(report.stats.stars, [1, 0, 1, 0, 1]);
}
