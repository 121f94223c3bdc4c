//! Configuration loading from reviewlens.toml
//!
//! ReviewLens configuration can be specified in a `reviewlens.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use reviewlens_report::ChartOptions;
use reviewlens_stats::{DEFAULT_DENSITY_POINTS, DEFAULT_HISTOGRAM_BINS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "reviewlens.toml";

/// ReviewLens configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReviewLensConfig {
    /// Analysis parameters
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Chart rendering
    #[serde(default)]
    pub charts: ChartsConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bins of the length and polarity histograms
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Points sampled along the rating density curve
    #[serde(default = "default_density_points")]
    pub density_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: default_histogram_bins(),
            density_points: default_density_points(),
        }
    }
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}
fn default_density_points() -> usize {
    DEFAULT_DENSITY_POINTS
}

/// Chart rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Render and write PNG charts
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            enabled: default_enabled(),
        }
    }
}

fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    600
}
fn default_enabled() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory charts are written to
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_output_dir() -> String {
    "target/reviewlens".to_string()
}

impl ReviewLensConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find `reviewlens.toml` by walking up from `start`
    pub fn find_from(start: impl Into<PathBuf>) -> Option<PathBuf> {
        let mut dir = start.into();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        let path = Self::find_from(dir)?;
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
                None
            }
        }
    }

    /// Chart rendering parameters
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.charts.width,
            height: self.charts.height,
            histogram_bins: self.analysis.histogram_bins,
            density_points: self.analysis.density_points,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# ReviewLens Configuration

[analysis]
# Bins of the review length and polarity histograms
histogram_bins = 20
# Points sampled along the rating density curve
density_points = 100

[charts]
# Render PNG charts
enabled = true
# Chart dimensions
width = 1000
height = 600

[output]
# Default output format: human, json
format = "human"
# Directory charts are written to
directory = "target/reviewlens"
"#
        .to_string()
    }
}
