//! Stopword filtering
//!
//! The exclusion set is the external stopword list unioned with ASCII
//! punctuation, so the tweet-aware tokenizer's punctuation tokens drop out
//! in the same pass.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// ASCII punctuation, each character also a standalone excluded token
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Order-preserving stopword filter backed by an external word list
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    excluded: HashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list (one word per line, each line trimmed of
    /// surrounding punctuation and whitespace) and union it with ASCII
    /// punctuation.
    ///
    /// A missing or unreadable list is a configuration error; the filter
    /// never falls back to an empty exclusion set.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("stopword list {}: {}", path.display(), e))
        })?;

        let mut excluded = HashSet::new();
        for line in contents.lines() {
            let word = line.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
            if !word.is_empty() {
                excluded.insert(word.to_string());
            }
        }
        for c in PUNCTUATION.chars() {
            excluded.insert(c.to_string());
        }

        Ok(Self { excluded })
    }

    /// Return the subsequence of `words` not in the exclusion set,
    /// preserving order. Idempotent.
    pub fn filter<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(|w| w.as_ref())
            .filter(|w| !self.excluded.contains(*w))
            .map(|w| w.to_string())
            .collect()
    }

    /// Whether a single word is excluded
    pub fn is_stopword(&self, word: &str) -> bool {
        self.excluded.contains(word)
    }

    /// Size of the exclusion set
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// True if the exclusion set is empty
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn filter_from(words: &str) -> StopwordFilter {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", words).unwrap();
        StopwordFilter::from_path(file.path()).unwrap()
    }

    #[test]
    fn test_missing_list_is_config_error() {
        let result = StopwordFilter::from_path("/nonexistent/stopwords.txt");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = filter_from("the\nand\na\n");
        let words: Vec<String> = ["keep", "the", "order", "and", "words"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(filter.filter(&words), vec!["keep", "order", "words"]);
    }

    #[test]
    fn test_punctuation_excluded() {
        let filter = filter_from("the\n");
        let words: Vec<String> = ["great", "!", ",", "news"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(filter.filter(&words), vec!["great", "news"]);
    }

    #[test]
    fn test_lines_trimmed_of_surrounding_punctuation() {
        let filter = filter_from("  the \n'and'\n");
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_idempotent() {
        let filter = filter_from("a\nan\nthe\n");
        let words: Vec<String> = ["a", "big", "the", "deal", "!"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let once = filter.filter(&words);
        let twice = filter.filter(&once);
        assert_eq!(once, twice);
    }
}
