//! Sentiment analysis
//!
//! Includes:
//! - The oracle contract plus the bundled lexicon implementation
//! - The sign-based classifier
//! - The store with label partitions and ranked queries

mod classifier;
mod oracle;
mod store;

pub use classifier::SentimentClassifier;
pub use oracle::{LexiconOracle, SentimentOracle};
pub use store::{SentimentStore, SentimentSummary};
