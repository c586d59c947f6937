//! Text processing
//!
//! Includes:
//! - Post normalization (mention/URL/symbol stripping)
//! - Tokenization (simple and tweet-aware)
//! - Word frequency histograms
//! - Stopword filtering

mod frequency;
mod normalizer;
mod stopwords;
mod tokenizer;

pub use frequency::{top_n, word_freq};
pub use normalizer::normalize;
pub use stopwords::StopwordFilter;
pub use tokenizer::{to_lower, tokenize_aware, tokenize_simple};
