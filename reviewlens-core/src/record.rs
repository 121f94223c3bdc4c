//! Review Record Model
//!
//! A [`ReviewRecord`] is one customer review as handed over by the storage
//! layer. Every field is optional: missing or malformed values degrade the
//! aggregates (zeros, skipped buckets) instead of failing a batch.
//!
//! Nullability rules differ per consumer and are kept explicit here:
//! - averaging treats an absent or malformed rating as `0`
//! - bucketing skips absent or malformed ratings
//! - moment metrics exclude absent ratings and polarities
//! - bucketing treats an absent polarity as `0`

use crate::lenient;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Lowest valid star rating
pub const MIN_STAR: u8 = 1;
/// Highest valid star rating
pub const MAX_STAR: u8 = 5;
/// Number of star buckets (1★ through 5★)
pub const STAR_COUNT: usize = 5;

/// Rating value as stored upstream
///
/// Ratings arrive either as numbers or as text columns. Numeric text is
/// coerced on construction; anything else is kept verbatim so the record
/// can be skipped by bucketing without aborting the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    /// A finite numeric rating (may be fractional)
    Numeric(f64),
    /// A value that could not be interpreted as a number
    Malformed(String),
}

impl Rating {
    /// Interpret a text column as a rating
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Rating::Numeric(value),
            _ => Rating::Malformed(text.to_string()),
        }
    }

    /// Numeric value, if the rating is well-formed
    pub fn value(&self) -> Option<f64> {
        match self {
            Rating::Numeric(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Rating::Numeric(value)
        } else {
            Rating::Malformed(value.to_string())
        }
    }
}

impl From<&str> for Rating {
    fn from(text: &str) -> Self {
        Rating::from_text(text)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Numeric(v) => serializer.serialize_f64(*v),
            Rating::Malformed(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatingVisitor;

        impl<'de> Visitor<'de> for RatingVisitor {
            type Value = Rating;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a numeric rating or rating text")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Rating, E> {
                Ok(Rating::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rating, E> {
                Ok(Rating::Numeric(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rating, E> {
                Ok(Rating::Numeric(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rating, E> {
                Ok(Rating::from_text(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Rating, E> {
                Ok(Rating::Malformed(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Rating, A::Error> {
                lenient::skip_seq(seq)?;
                Ok(Rating::Malformed("[list]".to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Rating, A::Error> {
                lenient::skip_map(map)?;
                Ok(Rating::Malformed("{object}".to_string()))
            }
        }

        deserializer.deserialize_any(RatingVisitor)
    }
}

/// Sentiment label assigned by the upstream classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive review
    Positive,
    /// Negative review
    Negative,
    /// Neutral review
    Neutral,
}

impl Sentiment {
    /// Case-insensitive match against the three known labels.
    ///
    /// Unknown labels return `None` and are excluded from every tally.
    pub fn parse(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("positive") {
            Some(Sentiment::Positive)
        } else if label.eq_ignore_ascii_case("negative") {
            Some(Sentiment::Negative)
        } else if label.eq_ignore_ascii_case("neutral") {
            Some(Sentiment::Neutral)
        } else {
            None
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// One customer review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Star rating, expected in [1, 5]
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Raw sentiment label (compared case-insensitively)
    #[serde(default, deserialize_with = "lenient::text")]
    pub sentiment: Option<String>,
    /// Polarity score in [-1, 1]
    #[serde(default, deserialize_with = "lenient::polarity")]
    pub polarity: Option<f64>,
    /// Review body
    #[serde(default, deserialize_with = "lenient::text")]
    pub review_text: Option<String>,
}

impl ReviewRecord {
    /// Create a fully populated record
    pub fn new(
        rating: impl Into<Rating>,
        sentiment: &str,
        polarity: f64,
        review_text: impl Into<String>,
    ) -> Self {
        Self {
            rating: Some(rating.into()),
            sentiment: Some(sentiment.to_string()),
            polarity: Some(polarity),
            review_text: Some(review_text.into()),
        }
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: impl Into<Rating>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Set the sentiment label
    pub fn with_sentiment(mut self, label: &str) -> Self {
        self.sentiment = Some(label.to_string());
        self
    }

    /// Set the polarity score
    pub fn with_polarity(mut self, polarity: f64) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Set the review text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.review_text = Some(text.into());
        self
    }

    /// Well-formed numeric rating, `None` when absent or malformed
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_ref().and_then(Rating::value)
    }

    /// Rating with absent or malformed values read as `0`
    pub fn rating_or_zero(&self) -> f64 {
        self.rating_value().unwrap_or(0.0)
    }

    /// Star bucket from the rating rounded to the nearest integer
    /// (ties to even). `None` when the rating is missing, malformed or
    /// rounds outside 1..=5.
    pub fn star(&self) -> Option<u8> {
        let rating = match &self.rating {
            Some(Rating::Numeric(v)) => *v,
            Some(Rating::Malformed(raw)) => {
                tracing::debug!(rating = %raw, "skipping record with malformed rating");
                return None;
            }
            None => 0.0,
        };
        star_from(rating.round_ties_even())
    }

    /// Star bucket from the rating truncated toward zero.
    ///
    /// Used by the length-by-rating box plot, where 4.7 counts as 4★.
    pub fn truncated_star(&self) -> Option<u8> {
        self.rating_value().and_then(|v| star_from(v.trunc()))
    }

    /// Parsed sentiment label
    pub fn sentiment_label(&self) -> Option<Sentiment> {
        self.sentiment.as_deref().and_then(Sentiment::parse)
    }

    /// Finite polarity score, `None` when absent
    pub fn polarity_value(&self) -> Option<f64> {
        self.polarity.filter(|p| p.is_finite())
    }

    /// Polarity with absent values read as `0` (neutral)
    pub fn polarity_or_zero(&self) -> f64 {
        self.polarity_value().unwrap_or(0.0)
    }

    /// Character count of the review text, `0` when absent
    pub fn text_length(&self) -> usize {
        self.review_text
            .as_deref()
            .map(|t| t.chars().count())
            .unwrap_or(0)
    }

    /// Whether the record carries non-empty review text
    pub fn has_text(&self) -> bool {
        self.review_text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

fn star_from(rounded: f64) -> Option<u8> {
    if rounded >= MIN_STAR as f64 && rounded <= MAX_STAR as f64 {
        Some(rounded as u8)
    } else {
        None
    }
}
