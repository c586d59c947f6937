//! Data types for post collection and sentiment analysis

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sentiment label for a single post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Positive polarity (> 0)
    Positive,
    /// Exactly zero polarity
    Neutral,
    /// Negative polarity (< 0)
    Negative,
}

impl Sentiment {
    /// Label a polarity score by strict sign.
    ///
    /// Exact zero maps to `Neutral`; there is no epsilon tolerance, so oracle
    /// outputs arbitrarily close to zero still classify as Positive/Negative.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity == 0.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(Error::InvalidLabel(other.to_string())),
        }
    }
}

/// Raw (polarity, subjectivity) pair produced by a sentiment oracle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed sentiment strength, -1.0 (most negative) to 1.0 (most positive)
    pub polarity: f64,
    /// Opinion-vs-fact score, 0.0 (fully objective) to 1.0 (fully subjective)
    pub subjectivity: f64,
}

/// A post together with its sentiment classification.
///
/// Created once by the classifier and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    /// Original post text
    pub text: String,
    /// Sign-based sentiment label
    pub sentiment: Sentiment,
    /// Polarity score from the oracle
    pub polarity: f64,
    /// Subjectivity score from the oracle
    pub subjectivity: f64,
}

/// Ordered sequence of scored posts, newest first (input order is recency order)
pub type SentimentCollection = Vec<ScoredPost>;

/// One fetched post with the metadata the collector keeps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// Unique post identifier, used as the pagination cursor
    pub id: u64,
    /// Full post text
    pub text: String,
    /// Publication time
    pub created_at: DateTime<Utc>,
    /// Author screen name
    pub author: String,
}

/// Configuration for the timeline collector
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Base URL of the API
    pub base_url: String,
    /// Bearer token (optional for public endpoints)
    pub bearer_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Posts requested per page
    pub page_size: usize,
    /// Maximum number of follow-up pages after the first
    pub max_cycles: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com/1.1".to_string(),
            bearer_token: None,
            timeout_secs: 30,
            page_size: 200,
            max_cycles: 15,
        }
    }
}
