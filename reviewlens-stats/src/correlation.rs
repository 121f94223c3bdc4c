//! Correlation Analysis
//!
//! Pearson correlation with two-tailed significance for the rating/polarity
//! and rating/text-length pairs.
//!
//! Degenerate inputs end in named terminal states rather than errors:
//! no data, insufficient variance, or a calculation error local to one pair.

use reviewlens_core::{PairedSeries, ReviewRecord, distinct_count, round_to};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Decimal places kept for the correlation coefficient
pub const R_DECIMALS: i32 = 2;
/// Decimal places kept for the p-value
pub const P_DECIMALS: i32 = 4;

/// Text reported when the input set is empty
pub const NO_DATA_TEXT: &str = "No data available";
/// Text reported when a variable is constant
pub const INSUFFICIENT_VARIANCE_TEXT: &str = "Insufficient variance";
/// Text reported when the computation failed numerically
pub const CALCULATION_ERROR_TEXT: &str = "Calculation error";

/// Qualitative strength of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    /// |r| <= 0.1
    Negligible,
    /// 0.1 < |r| <= 0.4
    Weak,
    /// 0.4 < |r| <= 0.7
    Moderate,
    /// |r| > 0.7
    Strong,
}

impl CorrelationStrength {
    /// Classify a coefficient by magnitude
    pub fn classify(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r > 0.7 {
            CorrelationStrength::Strong
        } else if abs_r > 0.4 {
            CorrelationStrength::Moderate
        } else if abs_r > 0.1 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationStrength::Negligible => write!(f, "Negligible"),
            CorrelationStrength::Weak => write!(f, "Weak"),
            CorrelationStrength::Moderate => write!(f, "Moderate"),
            CorrelationStrength::Strong => write!(f, "Strong"),
        }
    }
}

/// Sign of a correlation; zero counts as negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationDirection {
    /// r > 0
    Positive,
    /// r <= 0
    Negative,
}

impl CorrelationDirection {
    /// Direction of a coefficient
    pub fn of(r: f64) -> Self {
        if r > 0.0 {
            CorrelationDirection::Positive
        } else {
            CorrelationDirection::Negative
        }
    }
}

impl std::fmt::Display for CorrelationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationDirection::Positive => write!(f, "positive"),
            CorrelationDirection::Negative => write!(f, "negative"),
        }
    }
}

/// Unrounded Pearson result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonResult {
    /// Correlation coefficient in [-1, 1]
    pub r: f64,
    /// Two-tailed p-value
    pub p: f64,
    /// Number of pairs used
    pub n: usize,
}

impl PearsonResult {
    /// Strength of the coefficient
    pub fn strength(&self) -> CorrelationStrength {
        CorrelationStrength::classify(self.r)
    }

    /// Direction of the coefficient
    pub fn direction(&self) -> CorrelationDirection {
        CorrelationDirection::of(self.r)
    }

    /// Human-readable description, e.g. "Strong positive relationship"
    pub fn describe(&self) -> String {
        describe_relationship(self.r)
    }
}

/// Describe a coefficient as "<Strength> <direction> relationship"
pub fn describe_relationship(r: f64) -> String {
    format!(
        "{} {} relationship",
        CorrelationStrength::classify(r),
        CorrelationDirection::of(r)
    )
}

/// Errors from the Pearson computation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorrelationError {
    /// The two series differ in length
    #[error("Series lengths differ: {x} vs {y}")]
    LengthMismatch {
        /// Length of the first series
        x: usize,
        /// Length of the second series
        y: usize,
    },
    /// Fewer than two pairs
    #[error("Need at least 2 pairs, got {0}")]
    TooFewPairs(usize),
    /// One of the series is constant
    #[error("Series has zero variance")]
    ZeroVariance,
    /// The coefficient or p-value came out as NaN or infinite
    #[error("Non-finite correlation coefficient")]
    NonFinite,
    /// statrs rejected the t distribution parameters
    #[error("Invalid t distribution: {0}")]
    Distribution(String),
}

/// Terminal state of one correlation pair
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationOutcome {
    /// Coefficient and significance were computed
    Computed(PearsonResult),
    /// The input set was empty
    NoData,
    /// At least one variable was constant
    InsufficientVariance,
    /// The computation failed numerically
    CalculationError(CorrelationError),
}

impl CorrelationOutcome {
    /// Coefficient rounded for display, 0 for terminal states
    pub fn r(&self) -> f64 {
        match self {
            CorrelationOutcome::Computed(res) => round_to(res.r, R_DECIMALS),
            _ => 0.0,
        }
    }

    /// P-value rounded for display, 0 for terminal states
    pub fn p(&self) -> f64 {
        match self {
            CorrelationOutcome::Computed(res) => round_to(res.p, P_DECIMALS),
            _ => 0.0,
        }
    }

    /// Display text for the dashboard
    pub fn text(&self) -> String {
        match self {
            CorrelationOutcome::Computed(res) => res.describe(),
            CorrelationOutcome::NoData => NO_DATA_TEXT.to_string(),
            CorrelationOutcome::InsufficientVariance => INSUFFICIENT_VARIANCE_TEXT.to_string(),
            CorrelationOutcome::CalculationError(_) => CALCULATION_ERROR_TEXT.to_string(),
        }
    }

    /// Machine-readable status tag
    pub fn status(&self) -> CorrelationStatus {
        match self {
            CorrelationOutcome::Computed(_) => CorrelationStatus::Computed,
            CorrelationOutcome::NoData => CorrelationStatus::NoData,
            CorrelationOutcome::InsufficientVariance => CorrelationStatus::InsufficientVariance,
            CorrelationOutcome::CalculationError(_) => CorrelationStatus::CalculationError,
        }
    }

    /// Whether a coefficient was computed
    pub fn is_computed(&self) -> bool {
        matches!(self, CorrelationOutcome::Computed(_))
    }
}

/// Status tag of a correlation summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStatus {
    /// Coefficient computed
    Computed,
    /// Empty input
    NoData,
    /// Constant variable
    InsufficientVariance,
    /// Numerical failure
    CalculationError,
}

/// Display form of a correlation: `{r, p, text}` plus a status tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    /// Coefficient rounded to 2 decimals
    pub r: f64,
    /// P-value rounded to 4 decimals
    pub p: f64,
    /// Qualitative description
    pub text: String,
    /// Which terminal state produced this summary
    pub status: CorrelationStatus,
}

impl From<&CorrelationOutcome> for CorrelationSummary {
    fn from(outcome: &CorrelationOutcome) -> Self {
        Self {
            r: outcome.r(),
            p: outcome.p(),
            text: outcome.text(),
            status: outcome.status(),
        }
    }
}

/// Correlations reported on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Correlations {
    /// Rating vs. sentiment polarity
    pub rating_sentiment: CorrelationOutcome,
    /// Rating vs. review text length
    pub rating_length: CorrelationOutcome,
}

impl Correlations {
    /// Both pairs in the no-data state
    pub fn no_data() -> Self {
        Self {
            rating_sentiment: CorrelationOutcome::NoData,
            rating_length: CorrelationOutcome::NoData,
        }
    }
}

/// Pearson correlation coefficient and two-tailed p-value
///
/// The p-value comes from the t statistic `r * sqrt((n-2) / (1-r^2))` with
/// `n-2` degrees of freedom. Two pairs always give `|r| = 1` with `p = 1`.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<PearsonResult, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(CorrelationError::TooFewPairs(n));
    }

    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 {
        return Err(CorrelationError::ZeroVariance);
    }

    let r = sxy / denominator;
    if !r.is_finite() {
        return Err(CorrelationError::NonFinite);
    }
    // Rounding can push |r| marginally past 1
    let r = r.clamp(-1.0, 1.0);

    let p = if n == 2 {
        1.0
    } else if r.abs() == 1.0 {
        0.0
    } else {
        let df = nf - 2.0;
        let t = r * (df / (1.0 - r * r)).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| CorrelationError::Distribution(e.to_string()))?;
        (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0)
    };

    if !p.is_finite() {
        return Err(CorrelationError::NonFinite);
    }

    Ok(PearsonResult { r, p, n })
}

/// Correlate one pair of series with the variance guard applied
///
/// A pair with no complete observations is constant and reports
/// insufficient variance; only an empty record set is "no data".
pub fn correlate(pairs: &PairedSeries) -> CorrelationOutcome {
    if distinct_count(&pairs.x) <= 1 || distinct_count(&pairs.y) <= 1 {
        return CorrelationOutcome::InsufficientVariance;
    }

    match pearson(&pairs.x, &pairs.y) {
        Ok(result) => CorrelationOutcome::Computed(result),
        Err(e) => {
            tracing::warn!(error = %e, pairs = pairs.len(), "correlation calculation failed");
            CorrelationOutcome::CalculationError(e)
        }
    }
}

/// Compute the rating/polarity and rating/length correlations
///
/// Records missing a rating (or a polarity, for the first pair) are left out
/// of that pair; absent review text counts as length 0.
pub fn compute_correlations(records: &[ReviewRecord]) -> Correlations {
    if records.is_empty() {
        return Correlations::no_data();
    }

    let rating_polarity = PairedSeries::from_records(
        records,
        ReviewRecord::rating_value,
        ReviewRecord::polarity_value,
    );
    let rating_length = PairedSeries::from_records(records, ReviewRecord::rating_value, |r| {
        Some(r.text_length() as f64)
    });

    Correlations {
        rating_sentiment: correlate(&rating_polarity),
        rating_length: correlate(&rating_length),
    }
}
