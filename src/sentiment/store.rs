//! Sentiment store: label partitions and ranked queries
//!
//! Owns a scored collection and answers ranked/filtered queries without
//! re-scoring. All queries are pure reads.

use std::fmt;

use crate::error::{Error, Result};
use crate::models::{ScoredPost, Sentiment, SentimentCollection};

/// Owns a [`SentimentCollection`] plus cached per-label partitions.
///
/// The collection keeps its input order, which the queries treat as recency
/// order (newest first). Partitions hold indices into the collection, so
/// they are disjoint, order-preserving, and together cover every post.
#[derive(Debug, Clone)]
pub struct SentimentStore {
    posts: SentimentCollection,
    positive: Vec<usize>,
    negative: Vec<usize>,
    neutral: Vec<usize>,
}

impl SentimentStore {
    /// Partition a scored collection by label in a single pass
    pub fn new(posts: SentimentCollection) -> Self {
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        let mut neutral = Vec::new();

        for (i, post) in posts.iter().enumerate() {
            match post.sentiment {
                Sentiment::Positive => positive.push(i),
                Sentiment::Negative => negative.push(i),
                Sentiment::Neutral => neutral.push(i),
            }
        }

        Self {
            posts,
            positive,
            negative,
            neutral,
        }
    }

    /// All posts, in collection order
    pub fn posts(&self) -> &[ScoredPost] {
        &self.posts
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True if no posts are stored
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn label_indices(&self, label: Sentiment) -> &[usize] {
        match label {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    /// One label's partition, preserving collection order
    pub fn partition(&self, label: Sentiment) -> Vec<&ScoredPost> {
        self.label_indices(label)
            .iter()
            .map(|&i| &self.posts[i])
            .collect()
    }

    /// First `count` posts of a label's partition (collection order is
    /// recency order). Returns fewer if the partition is smaller.
    pub fn most_recent(&self, label: Sentiment, count: usize) -> Vec<&ScoredPost> {
        self.label_indices(label)
            .iter()
            .take(count)
            .map(|&i| &self.posts[i])
            .collect()
    }

    /// The `count` most extreme posts of a label.
    ///
    /// Positive sorts by polarity descending (most positive first), Negative
    /// ascending (most negative first); both stable on ties. Any other label
    /// is rejected.
    pub fn most_extreme(&self, label: Sentiment, count: usize) -> Result<Vec<&ScoredPost>> {
        let mut ranked = match label {
            Sentiment::Positive | Sentiment::Negative => self.partition(label),
            Sentiment::Neutral => {
                return Err(Error::InvalidLabel(
                    "most_extreme expects positive or negative".to_string(),
                ))
            }
        };

        if label == Sentiment::Positive {
            ranked.sort_by(|a, b| b.polarity.total_cmp(&a.polarity));
        } else {
            ranked.sort_by(|a, b| a.polarity.total_cmp(&b.polarity));
        }

        ranked.truncate(count);
        Ok(ranked)
    }

    /// The `count` most objective posts of the whole collection
    /// (subjectivity ascending, stable on ties)
    pub fn most_objective(&self, count: usize) -> Vec<&ScoredPost> {
        let mut ranked: Vec<&ScoredPost> = self.posts.iter().collect();
        ranked.sort_by(|a, b| a.subjectivity.total_cmp(&b.subjectivity));
        ranked.truncate(count);
        ranked
    }

    /// The `count` most subjective posts of the whole collection
    /// (subjectivity descending, stable on ties)
    pub fn most_subjective(&self, count: usize) -> Vec<&ScoredPost> {
        let mut ranked: Vec<&ScoredPost> = self.posts.iter().collect();
        ranked.sort_by(|a, b| b.subjectivity.total_cmp(&a.subjectivity));
        ranked.truncate(count);
        ranked
    }

    /// Per-label counts and percentages
    pub fn summary(&self) -> SentimentSummary {
        SentimentSummary {
            total: self.posts.len(),
            positive: self.positive.len(),
            negative: self.negative.len(),
            neutral: self.neutral.len(),
        }
    }
}

/// Label breakdown of a stored collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    fn pct(count: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        100.0 * count as f64 / total as f64
    }

    /// Share of positive posts, in percent
    pub fn positive_pct(&self) -> f64 {
        Self::pct(self.positive, self.total)
    }

    /// Share of negative posts, in percent
    pub fn negative_pct(&self) -> f64 {
        Self::pct(self.negative, self.total)
    }

    /// Share of neutral posts, in percent
    pub fn neutral_pct(&self) -> f64 {
        Self::pct(self.neutral, self.total)
    }
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Analyzed {} posts: {:.1}% positive, {:.1}% negative, {:.1}% neutral",
            self.total,
            self.positive_pct(),
            self.negative_pct(),
            self.neutral_pct()
        )
    }
}
