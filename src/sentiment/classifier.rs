//! Per-post sentiment classification

use crate::error::Result;
use crate::models::{ScoredPost, Sentiment, SentimentCollection};
use crate::sentiment::oracle::{LexiconOracle, SentimentOracle};
use crate::text::normalize;

/// Classifies posts by normalizing their text, scoring it through a
/// sentiment oracle, and labeling the polarity by strict sign.
#[derive(Debug, Clone)]
pub struct SentimentClassifier<O: SentimentOracle = LexiconOracle> {
    oracle: O,
}

impl SentimentClassifier<LexiconOracle> {
    /// Create a classifier backed by the built-in lexicon oracle
    pub fn new() -> Self {
        Self {
            oracle: LexiconOracle::new(),
        }
    }
}

impl Default for SentimentClassifier<LexiconOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: SentimentOracle> SentimentClassifier<O> {
    /// Create a classifier over any oracle implementation
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Classify one post.
    ///
    /// The text is normalized before scoring. Labels follow the strict sign
    /// of the polarity: > 0 positive, exactly 0 neutral, < 0 negative.
    pub fn classify(&self, text: &str) -> Result<ScoredPost> {
        let score = self.oracle.score(&normalize(text))?;

        Ok(ScoredPost {
            text: text.to_string(),
            sentiment: Sentiment::from_polarity(score.polarity),
            polarity: score.polarity,
            subjectivity: score.subjectivity,
        })
    }

    /// Classify every post in order.
    ///
    /// Fails fast on the first oracle error; no partial results are returned.
    pub fn classify_all<S: AsRef<str>>(&self, posts: &[S]) -> Result<SentimentCollection> {
        let mut scored = Vec::with_capacity(posts.len());
        for post in posts {
            scored.push(self.classify(post.as_ref())?);
        }
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::SentimentScore;

    /// Oracle returning a fixed score per call, failing on texts that
    /// contain "boom"
    struct StubOracle {
        polarity: f64,
        subjectivity: f64,
    }

    impl SentimentOracle for StubOracle {
        fn score(&self, text: &str) -> Result<SentimentScore> {
            if text.contains("boom") {
                return Err(Error::Oracle("malformed input".to_string()));
            }
            Ok(SentimentScore {
                polarity: self.polarity,
                subjectivity: self.subjectivity,
            })
        }
    }

    #[test]
    fn test_label_follows_polarity_sign() {
        for (polarity, expected) in [
            (0.4, Sentiment::Positive),
            (-0.4, Sentiment::Negative),
            (0.0, Sentiment::Neutral),
            (f64::MIN_POSITIVE, Sentiment::Positive),
        ] {
            let classifier = SentimentClassifier::with_oracle(StubOracle {
                polarity,
                subjectivity: 0.5,
            });
            let scored = classifier.classify("anything").unwrap();
            assert_eq!(scored.sentiment, expected);
            assert_eq!(scored.polarity, polarity);
        }
    }

    #[test]
    fn test_keeps_original_text() {
        let classifier = SentimentClassifier::with_oracle(StubOracle {
            polarity: 0.2,
            subjectivity: 0.1,
        });
        let scored = classifier.classify("Raw @text http://x.co here").unwrap();

        // The stored text is the raw post, not the normalized form
        assert_eq!(scored.text, "Raw @text http://x.co here");
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let classifier = SentimentClassifier::with_oracle(StubOracle {
            polarity: 0.1,
            subjectivity: 0.2,
        });
        let posts = vec!["first", "second", "third"];
        let collection = classifier.classify_all(&posts).unwrap();

        let texts: Vec<&str> = collection.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, posts);
    }

    #[test]
    fn test_classify_all_fails_fast() {
        let classifier = SentimentClassifier::with_oracle(StubOracle {
            polarity: 0.1,
            subjectivity: 0.2,
        });
        let posts = vec!["fine", "boom here", "never scored"];
        let result = classifier.classify_all(&posts);

        assert!(matches!(result, Err(Error::Oracle(_))));
    }

    #[test]
    fn test_lexicon_backed_classifier() {
        let classifier = SentimentClassifier::new();

        let positive = classifier.classify("What a great day").unwrap();
        assert_eq!(positive.sentiment, Sentiment::Positive);

        let negative = classifier.classify("A terrible disaster").unwrap();
        assert_eq!(negative.sentiment, Sentiment::Negative);

        let neutral = classifier.classify("The meeting is at noon").unwrap();
        assert_eq!(neutral.sentiment, Sentiment::Neutral);
    }
}
