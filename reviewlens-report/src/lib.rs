#![warn(missing_docs)]
//! ReviewLens Report - Output and Visualization
//!
//! - Serializable report structures and JSON output
//! - Chart datasets for the dashboard
//! - PNG rasterization with a fixed dark theme and labelled axes

mod charts;
mod json;
mod report;

pub use charts::{
    BoxPlotChart, BoxStats, ChartArtifact, ChartData, ChartKind, ChartOptions, DensityCurve,
    HistogramChart, MIN_DENSITY_POINTS, NO_DATA_MESSAGE, POLARITY_RANGE, RATING_RANGE,
    RatingSpreadChart, StarBox, box_stats, build_dataset, length_by_rating, length_histogram,
    polarity_histogram, rating_spread, render_all, render_chart,
};
pub use json::generate_json_report;
pub use report::{AnalyticsReport, ChartSummary, ReportCorrelations, ReportMeta, SCHEMA_VERSION};

/// Errors raised while rasterizing a chart
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Requested size leaves no room for the plot area
    #[error("Canvas {width}x{height} is too small to draw a chart")]
    CanvasTooSmall {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The embedded label font could not be parsed
    #[error("Invalid chart font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON report
    Json,
    /// Human-readable terminal output
    #[default]
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
