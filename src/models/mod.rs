//! Data models
//!
//! Shared types for posts, sentiment scores, and collector configuration.

mod types;

pub use types::{
    PostRecord, ScoredPost, Sentiment, SentimentCollection, SentimentScore, TimelineConfig,
};
