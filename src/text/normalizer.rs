//! Post text normalization
//!
//! Strips the tweet-specific noise (mentions, links, symbols) that would
//! otherwise pollute word counts and sentiment scoring.

use regex::Regex;
use std::sync::LazyLock;

/// Matches @mentions, then any character outside ASCII alphanumerics and
/// space/tab, then `scheme://...` links. Branch order mirrors the cleaning
/// rule the pipeline was built around: a mention or link is consumed whole
/// before its characters can be stripped one by one.
static NOISE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").unwrap());

/// Normalize a single post.
///
/// Removes @mentions, URLs, and every character that is not an ASCII letter,
/// digit, or whitespace, then collapses whitespace runs to single spaces and
/// trims the ends. Pure function.
pub fn normalize(text: &str) -> String {
    let stripped = NOISE_REGEX.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
