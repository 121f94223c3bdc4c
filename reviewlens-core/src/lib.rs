#![warn(missing_docs)]
//! ReviewLens Core - Review Record Model
//!
//! Shared data contract for the analytics engine:
//! - `ReviewRecord` with explicit optional fields
//! - `Rating` coercion of numeric text and malformed values
//! - `Sentiment` labels compared case-insensitively
//! - Per-review numeric series for moments, correlation and charts

mod lenient;
mod numeric;
mod record;
mod series;

pub use numeric::{distinct_count, mean, round_to};
pub use record::{MAX_STAR, MIN_STAR, Rating, ReviewRecord, STAR_COUNT, Sentiment};
pub use series::{PairedSeries, ReviewSeries};
