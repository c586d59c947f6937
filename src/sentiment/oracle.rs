//! Sentiment scoring oracle
//!
//! The classifier only depends on the [`SentimentOracle`] contract; the
//! bundled [`LexiconOracle`] is a lexicon-based implementation with
//! intensity modifiers and negation handling.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::models::SentimentScore;

/// Black-box scoring capability: text in, (polarity, subjectivity) out
pub trait SentimentOracle {
    /// Score a text. Polarity lands in [-1, 1], subjectivity in [0, 1].
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

/// Lexicon entries: word -> (polarity, subjectivity)
type Lexicon = HashMap<&'static str, (f64, f64)>;

/// Lexicon-based sentiment oracle
///
/// Polarity is the clamped mean of matched word polarities, with intensity
/// modifiers applied and negated hits inverted with damping. Subjectivity is
/// the clamped mean of matched word subjectivities. A text with no lexicon
/// hits scores exactly (0.0, 0.0).
#[derive(Debug, Clone)]
pub struct LexiconOracle {
    lexicon: Lexicon,
    modifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    /// Words after a negation that it still applies to
    negation_window: usize,
}

impl LexiconOracle {
    /// Create an oracle with the built-in English lexicon
    pub fn new() -> Self {
        Self {
            lexicon: build_lexicon(),
            modifiers: build_modifiers(),
            negations: build_negations(),
            negation_window: 3,
        }
    }

    /// Set the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    fn score_words(&self, text: &str) -> SentimentScore {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0usize;

        for raw in text.split_whitespace() {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.negations.contains(word.as_str()) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.modifiers.get(word.as_str()) {
                current_modifier = *modifier;
                continue;
            }

            if let Some((base_polarity, base_subjectivity)) = self.lexicon.get(word.as_str()) {
                let mut polarity = base_polarity * current_modifier;
                if negation_active && words_since_negation < self.negation_window {
                    // Invert with damping rather than a full flip
                    polarity = -polarity * 0.8;
                }

                polarity_sum += polarity;
                subjectivity_sum += base_subjectivity;
                hits += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if hits == 0 {
            return SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        SentimentScore {
            polarity: (polarity_sum / hits as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / hits as f64).clamp(0.0, 1.0),
        }
    }
}

impl SentimentOracle for LexiconOracle {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.score_words(text))
    }
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn build_lexicon() -> Lexicon {
    [
        // Strongly positive
        ("amazing", (0.8, 0.9)),
        ("awesome", (0.8, 0.9)),
        ("best", (1.0, 0.3)),
        ("brilliant", (0.9, 0.9)),
        ("excellent", (0.9, 0.9)),
        ("fantastic", (0.8, 0.9)),
        ("great", (0.8, 0.75)),
        ("incredible", (0.9, 0.9)),
        ("love", (0.6, 0.6)),
        ("perfect", (1.0, 1.0)),
        ("tremendous", (0.8, 0.8)),
        ("wonderful", (0.9, 1.0)),
        // Moderately positive
        ("beautiful", (0.7, 0.9)),
        ("enjoy", (0.5, 0.5)),
        ("excited", (0.4, 0.8)),
        ("glad", (0.5, 0.9)),
        ("good", (0.7, 0.6)),
        ("happy", (0.7, 0.9)),
        ("honor", (0.4, 0.4)),
        ("nice", (0.6, 0.9)),
        ("proud", (0.5, 0.8)),
        ("strong", (0.4, 0.5)),
        ("success", (0.5, 0.4)),
        ("thank", (0.4, 0.4)),
        ("win", (0.6, 0.5)),
        ("winning", (0.6, 0.5)),
        // Strongly negative
        ("awful", (-0.9, 0.9)),
        ("corrupt", (-0.8, 0.8)),
        ("disaster", (-0.9, 0.8)),
        ("disgraceful", (-0.8, 0.9)),
        ("fake", (-0.6, 0.7)),
        ("fraud", (-0.9, 0.8)),
        ("horrible", (-1.0, 1.0)),
        ("terrible", (-1.0, 1.0)),
        ("worst", (-1.0, 0.3)),
        // Moderately negative
        ("bad", (-0.7, 0.67)),
        ("crooked", (-0.6, 0.8)),
        ("fail", (-0.5, 0.5)),
        ("failing", (-0.5, 0.5)),
        ("hate", (-0.7, 0.8)),
        ("loser", (-0.6, 0.7)),
        ("lose", (-0.4, 0.4)),
        ("sad", (-0.5, 1.0)),
        ("scandal", (-0.6, 0.6)),
        ("weak", (-0.5, 0.5)),
        ("wrong", (-0.5, 0.5)),
    ]
    .into_iter()
    .collect()
}

fn build_modifiers() -> HashMap<&'static str, f64> {
    [
        ("absolutely", 1.4),
        ("barely", 0.6),
        ("extremely", 1.5),
        ("fairly", 0.9),
        ("highly", 1.3),
        ("really", 1.25),
        ("slightly", 0.7),
        ("so", 1.2),
        ("somewhat", 0.8),
        ("totally", 1.3),
        ("very", 1.3),
    ]
    .into_iter()
    .collect()
}

fn build_negations() -> HashSet<&'static str> {
    [
        "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "never", "no", "not", "wasnt",
        "wont", "wouldnt",
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let oracle = LexiconOracle::new();
        let score = oracle.score("What a great and wonderful day").unwrap();

        assert!(score.polarity > 0.0);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let oracle = LexiconOracle::new();
        let score = oracle.score("A terrible horrible disaster").unwrap();

        assert!(score.polarity < 0.0);
    }

    #[test]
    fn test_no_hits_scores_exact_zero() {
        let oracle = LexiconOracle::new();
        let score = oracle.score("the chair is on the floor").unwrap();

        assert_eq!(score.polarity, 0.0);
        assert_eq!(score.subjectivity, 0.0);
    }

    #[test]
    fn test_modifier_intensifies() {
        let oracle = LexiconOracle::new();
        let plain = oracle.score("good").unwrap();
        let intensified = oracle.score("very good").unwrap();

        assert!(intensified.polarity > plain.polarity);
    }

    #[test]
    fn test_negation_flips_sign() {
        let oracle = LexiconOracle::new();
        let score = oracle.score("this is not good").unwrap();

        assert!(score.polarity < 0.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let oracle = LexiconOracle::new();
        let score = oracle
            .score("extremely perfect wonderful best amazing")
            .unwrap();

        assert!(score.polarity <= 1.0);
        assert!(score.subjectivity <= 1.0);
    }
}
