//! Tokenization of post collections
//!
//! Two strategies, matching the two word-count views the reports compare:
//! a simple path that normalizes first and splits on whitespace, and a
//! tweet-aware path that keeps @mentions, #hashtags, URLs, and emoticons
//! intact as single tokens.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::normalizer::normalize;

/// Tweet-aware token alternation. Branches, in match-preference order:
/// URLs, @mentions, #hashtags, heart and face emoticons, words (with inner
/// apostrophes), then any single non-space symbol as a standalone token.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://\S+)|(?:www\.\S+)|(?:@\w+)|(?:#\w+)|(?:<3)|(?:[<>]?[:;=8][\-o\*']?[\)\]\(\[dDpP/\\\|@\}\{])|(?:\w+(?:'\w+)*)|(?:[^\w\s])",
    )
    .unwrap()
});

/// Tokenize posts by normalizing each one and splitting on whitespace.
///
/// Output preserves post order, then within-post order.
pub fn tokenize_simple<S: AsRef<str>>(posts: &[S]) -> Vec<String> {
    let mut words = Vec::new();
    for post in posts {
        for word in normalize(post.as_ref()).split_whitespace() {
            words.push(word.to_string());
        }
    }
    words
}

/// Tokenize posts keeping social-media constructs as single tokens.
///
/// @mentions, #hashtags, URLs, and common ASCII emoticons survive whole;
/// everything else splits on whitespace and punctuation boundaries, with
/// punctuation emitted as standalone tokens so a stopword pass can drop it.
pub fn tokenize_aware<S: AsRef<str>>(posts: &[S]) -> Vec<String> {
    let mut tokens = Vec::new();
    for post in posts {
        for m in TOKEN_REGEX.find_iter(post.as_ref()) {
            tokens.push(m.as_str().to_string());
        }
    }
    tokens
}

/// Lowercase every word, preserving order and length
pub fn to_lower(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
