//! # Social Sentiment
//!
//! Word-frequency statistics and sentiment classification for a user's
//! social media posts.
//!
//! ## Modules
//!
//! - `collector` - Timeline fetching and snapshot persistence
//! - `models` - Shared data types
//! - `text` - Normalization, tokenization, histograms, stopword filtering
//! - `sentiment` - Oracle, classifier, and ranked-query store
//!
//! ## Example
//!
//! ```rust
//! use social_sentiment::sentiment::{SentimentClassifier, SentimentStore};
//! use social_sentiment::models::Sentiment;
//!
//! fn main() -> social_sentiment::Result<()> {
//!     let posts = vec!["What a great day!", "This is terrible.", "Lunch at noon."];
//!
//!     let classifier = SentimentClassifier::new();
//!     let store = SentimentStore::new(classifier.classify_all(&posts)?);
//!
//!     println!("{}", store.summary());
//!     for post in store.most_recent(Sentiment::Positive, 5) {
//!         println!("{}", post.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod error;
pub mod models;
pub mod sentiment;
pub mod text;

pub use collector::TimelineClient;
pub use error::{Error, Result};
pub use models::{PostRecord, ScoredPost, Sentiment, SentimentCollection, SentimentScore};
pub use sentiment::{LexiconOracle, SentimentClassifier, SentimentOracle, SentimentStore};
pub use text::{normalize, StopwordFilter};
