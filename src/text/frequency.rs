//! Word frequency histograms

use std::collections::HashMap;

/// Count word occurrences. O(n) in the input length.
pub fn word_freq<S: AsRef<str>>(words: &[S]) -> HashMap<String, usize> {
    let mut hist = HashMap::new();
    for word in words {
        *hist.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    hist
}

/// Return up to `n` histogram entries, sorted by count descending with ties
/// broken by word descending (a descending sort over `(count, word)` pairs).
pub fn top_n(hist: &HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = hist
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_freq_counts() {
        let words = vec!["a", "b", "a"];
        let hist = word_freq(&words);

        assert_eq!(hist.len(), 2);
        assert_eq!(hist["a"], 2);
        assert_eq!(hist["b"], 1);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let words = vec!["x", "y", "x", "z", "x", "y"];
        let hist = word_freq(&words);
        assert_eq!(hist.values().sum::<usize>(), words.len());
    }

    #[test]
    fn test_top_n_order_and_tie_break() {
        let hist = word_freq(&["a", "a", "b", "b", "c"]);
        let top = top_n(&hist, 2);

        // Equal counts break ties by word descending
        assert_eq!(top, vec![("b".to_string(), 2), ("a".to_string(), 2)]);
    }

    #[test]
    fn test_top_n_clamps_to_available() {
        let hist = word_freq(&["only", "two", "only"]);
        let top = top_n(&hist, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("only".to_string(), 2));
    }

    #[test]
    fn test_top_n_empty() {
        let hist: HashMap<String, usize> = HashMap::new();
        assert!(top_n(&hist, 5).is_empty());
    }
}
