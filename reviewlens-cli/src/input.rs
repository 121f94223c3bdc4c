//! Review Loading
//!
//! Reads review records from JSON (an array of objects) or CSV (a header row
//! naming the record fields). Unknown keys and columns are ignored; missing
//! ones are absent values.

use reviewlens_core::{Rating, ReviewRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Errors raised while loading review records
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The JSON document is not an array of review objects
    #[error("Invalid JSON review data: {0}")]
    Json(#[from] serde_json::Error),
    /// The CSV document could not be parsed
    #[error("Invalid CSV review data: {0}")]
    Csv(#[from] csv::Error),
    /// The input format is neither given nor inferable
    #[error("Unknown input format: {0}")]
    UnknownFormat(String),
}

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of objects
    Json,
    /// CSV with a header row
    Csv,
}

impl InputFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| InputError::UnknownFormat(path.display().to_string()))
    }
}

impl std::str::FromStr for InputFormat {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            other => Err(InputError::UnknownFormat(other.to_string())),
        }
    }
}

/// One CSV row; every cell is read as text so a bad cell never rejects the file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    rating: Option<String>,
    sentiment: Option<String>,
    polarity: Option<String>,
    review_text: Option<String>,
}

impl From<CsvRow> for ReviewRecord {
    fn from(row: CsvRow) -> Self {
        let polarity = row.polarity.as_deref().and_then(|raw| {
            let parsed = raw.trim().parse::<f64>().ok();
            if parsed.is_none() {
                tracing::debug!(polarity = %raw, "treating malformed polarity as absent");
            }
            parsed
        });
        ReviewRecord {
            rating: row.rating.as_deref().map(Rating::from_text),
            sentiment: row.sentiment,
            polarity,
            review_text: row.review_text,
        }
    }
}

/// Parse a JSON array of review objects
pub fn parse_json(content: &str) -> Result<Vec<ReviewRecord>, InputError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse CSV review rows from a reader
pub fn parse_csv(reader: impl Read) -> Result<Vec<ReviewRecord>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        records.push(ReviewRecord::from(row?));
    }
    Ok(records)
}

/// Load review records from a file
///
/// The format is taken from `format` when given, otherwise from the file
/// extension.
pub fn load_reviews(path: &Path, format: Option<InputFormat>) -> Result<Vec<ReviewRecord>, InputError> {
    let format = match format {
        Some(f) => f,
        None => InputFormat::from_path(path)?,
    };
    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let records = match format {
        InputFormat::Json => parse_json(&std::fs::read_to_string(path).map_err(io_err)?)?,
        InputFormat::Csv => parse_csv(std::fs::File::open(path).map_err(io_err)?)?,
    };

    tracing::info!(path = %path.display(), records = records.len(), "loaded reviews");
    Ok(records)
}
