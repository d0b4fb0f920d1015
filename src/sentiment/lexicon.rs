//! Static word-score lexicon
//!
//! General-purpose English tweet vocabulary. Scores are in [-1, 1];
//! positive words above zero, negative below.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static WORD_SCORES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let entries: &[(&str, f64)] = &[
        // strongly positive
        ("amazing", 0.8),
        ("awesome", 0.75),
        ("best", 0.85),
        ("brilliant", 0.8),
        ("excellent", 0.8),
        ("fantastic", 0.8),
        ("incredible", 0.85),
        ("love", 0.7),
        ("perfect", 0.85),
        ("wonderful", 0.8),
        ("great", 0.7),
        // moderately positive
        ("better", 0.4),
        ("calm", 0.3),
        ("good", 0.5),
        ("happy", 0.6),
        ("healthy", 0.5),
        ("hope", 0.45),
        ("hopeful", 0.55),
        ("kind", 0.4),
        ("nice", 0.45),
        ("positive", 0.5),
        ("progress", 0.45),
        ("recover", 0.5),
        ("recovery", 0.5),
        ("relief", 0.45),
        ("safe", 0.4),
        ("strong", 0.45),
        ("success", 0.6),
        ("support", 0.35),
        ("thanks", 0.5),
        ("thankful", 0.6),
        ("win", 0.55),
        ("winning", 0.55),
        // strongly negative
        ("awful", -0.8),
        ("catastrophe", -0.9),
        ("crisis", -0.7),
        ("death", -0.8),
        ("disaster", -0.9),
        ("hate", -0.7),
        ("horrible", -0.85),
        ("terrible", -0.8),
        ("tragic", -0.85),
        ("worst", -0.9),
        // moderately negative
        ("afraid", -0.5),
        ("angry", -0.6),
        ("bad", -0.6),
        ("danger", -0.55),
        ("dangerous", -0.6),
        ("die", -0.7),
        ("fail", -0.55),
        ("failure", -0.6),
        ("fear", -0.55),
        ("lose", -0.45),
        ("losing", -0.45),
        ("negative", -0.5),
        ("panic", -0.6),
        ("poor", -0.5),
        ("sad", -0.55),
        ("scared", -0.55),
        ("sick", -0.5),
        ("wrong", -0.4),
        ("worry", -0.45),
        ("worried", -0.5),
    ];
    entries.iter().copied().collect()
});

/// Words that flip the sign of the next sentiment-bearing word.
static NEGATIONS: &[&str] = &["no", "not", "never", "neither", "nor", "cannot", "without"];

/// Score for a lowercase word, if the lexicon knows it.
pub fn word_score(word: &str) -> Option<f64> {
    WORD_SCORES.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words() {
        assert!(word_score("great").unwrap() > 0.0);
        assert!(word_score("terrible").unwrap() < 0.0);
        assert_eq!(word_score("the"), None);
    }

    #[test]
    fn test_negations() {
        assert!(is_negation("not"));
        assert!(!is_negation("very"));
    }
}
