//! Chart Rendering
//!
//! Four dashboard charts, each built in two steps: a numeric dataset
//! computed from the review series, then a PNG rasterized from it. A chart
//! whose series is empty degrades to a placeholder image with
//! `has_data == false` instead of failing.

mod boxplot;
mod canvas;
mod histogram;
mod spread;
mod theme;

pub use boxplot::{BoxPlotChart, BoxStats, StarBox, box_stats, length_by_rating};
pub use histogram::{HistogramChart, POLARITY_RANGE, length_histogram, polarity_histogram};
pub use spread::{DensityCurve, MIN_DENSITY_POINTS, RATING_RANGE, RatingSpreadChart, rating_spread};

use crate::RenderError;
use canvas::Canvas;
use reviewlens_core::ReviewSeries;
use reviewlens_stats::{DEFAULT_DENSITY_POINTS, DEFAULT_HISTOGRAM_BINS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message attached to placeholder charts
pub const NO_DATA_MESSAGE: &str = "No Data Available";

/// The dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Histogram of review text lengths
    ReviewLength,
    /// Histogram of polarity scores over [-1, 1]
    SentimentPolarity,
    /// Box plot of text length per star rating
    LengthByRating,
    /// Star histogram with mean, std and density overlays
    RatingSpread,
}

impl ChartKind {
    /// Every chart, in dashboard order
    pub const ALL: [ChartKind; 4] = [
        ChartKind::ReviewLength,
        ChartKind::SentimentPolarity,
        ChartKind::LengthByRating,
        ChartKind::RatingSpread,
    ];

    /// Stable identifier, also the file stem of the written PNG
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::ReviewLength => "review_length",
            ChartKind::SentimentPolarity => "sentiment_polarity",
            ChartKind::LengthByRating => "length_by_rating",
            ChartKind::RatingSpread => "rating_spread",
        }
    }

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::ReviewLength => "Distribution of Review Lengths",
            ChartKind::SentimentPolarity => "Distribution of Sentiment Polarity",
            ChartKind::LengthByRating => "Review Length vs. Rating",
            ChartKind::RatingSpread => "Rating Spread",
        }
    }

    /// Horizontal axis description
    pub fn x_label(&self) -> &'static str {
        match self {
            ChartKind::ReviewLength => "Review Length (characters)",
            ChartKind::SentimentPolarity => "Polarity Score (-1 to 1)",
            ChartKind::LengthByRating | ChartKind::RatingSpread => "Rating",
        }
    }

    /// Vertical axis description
    pub fn y_label(&self) -> &'static str {
        match self {
            ChartKind::LengthByRating => "Review Length (characters)",
            _ => "Number of Reviews",
        }
    }

    /// PNG file name
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bin count of the length and polarity histograms
    pub histogram_bins: usize,
    /// Grid size of the rating density curve
    pub density_points: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            density_points: DEFAULT_DENSITY_POINTS,
        }
    }
}

/// Numeric values a chart was drawn from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    /// Length or polarity histogram
    Histogram(HistogramChart),
    /// Length-by-rating box plot
    BoxPlot(BoxPlotChart),
    /// Rating spread
    RatingSpread(RatingSpreadChart),
}

/// A rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    /// Which chart this is
    pub kind: ChartKind,
    /// False when the chart is a placeholder
    pub has_data: bool,
    /// Placeholder message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Dataset behind the image, `None` for placeholders
    pub data: Option<ChartData>,
    /// Encoded PNG
    #[serde(skip)]
    pub png: Vec<u8>,
}

/// Compute the dataset of one chart; `None` when its series is empty
pub fn build_dataset(kind: ChartKind, series: &ReviewSeries, options: &ChartOptions) -> Option<ChartData> {
    match kind {
        ChartKind::ReviewLength => {
            length_histogram(series, options.histogram_bins).map(ChartData::Histogram)
        }
        ChartKind::SentimentPolarity => {
            polarity_histogram(series, options.histogram_bins).map(ChartData::Histogram)
        }
        ChartKind::LengthByRating => length_by_rating(series).map(ChartData::BoxPlot),
        ChartKind::RatingSpread => {
            rating_spread(series, options.density_points).map(ChartData::RatingSpread)
        }
    }
}

/// Build and rasterize one chart
pub fn render_chart(
    kind: ChartKind,
    series: &ReviewSeries,
    options: &ChartOptions,
) -> Result<ChartArtifact, RenderError> {
    let mut canvas = Canvas::new(options.width, options.height)?;
    let data = build_dataset(kind, series, options);

    match &data {
        Some(ChartData::Histogram(chart)) => histogram::draw(&mut canvas, kind, chart),
        Some(ChartData::BoxPlot(chart)) => boxplot::draw(&mut canvas, kind, chart),
        Some(ChartData::RatingSpread(chart)) => spread::draw(&mut canvas, kind, chart),
        None => canvas.draw_placeholder(NO_DATA_MESSAGE),
    }

    let has_data = data.is_some();
    if has_data {
        tracing::debug!(chart = %kind, has_data, "rendered chart");
    } else {
        tracing::info!(chart = %kind, has_data, "no data, rendered placeholder");
    }

    Ok(ChartArtifact {
        kind,
        has_data,
        message: (!has_data).then(|| NO_DATA_MESSAGE.to_string()),
        data,
        png: canvas.encode_png()?,
    })
}

/// Render every chart sequentially, in dashboard order
pub fn render_all(series: &ReviewSeries, options: &ChartOptions) -> Result<Vec<ChartArtifact>, RenderError> {
    ChartKind::ALL
        .iter()
        .map(|&kind| render_chart(kind, series, options))
        .collect()
}
