use crate::sentiment::lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").unwrap());

/// How many tokens after a negation word still get their sign flipped.
const NEGATION_WINDOW: usize = 3;

/// Result of scoring one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Overall polarity in [-1, 1]; 0 when the text carries no signal.
    pub polarity: f64,
    /// Fraction of tokens that carried sentiment, in [0, 1].
    pub subjectivity: f64,
}

/// Coarse sentiment bucket derived from polarity.
///
/// `Neutral` covers both "polarity exactly zero" and "no lexicon hit at all";
/// the two cases are deliberately not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Score a piece of text against the lexicon.
///
/// Polarity is the mean score of matched words, with a negation word flipping
/// the sign of matches inside a short following window. Empty text and text
/// with no lexicon hits both score (0, 0).
pub fn score(text: &str) -> Sentiment {
    let mut total = 0.0;
    let mut hits = 0usize;
    let mut tokens = 0usize;
    let mut negated_for = 0usize;

    for m in WORD_REGEX.find_iter(text) {
        tokens += 1;
        let word = m.as_str().to_lowercase();

        if lexicon::is_negation(&word) {
            negated_for = NEGATION_WINDOW;
            continue;
        }

        if let Some(base) = lexicon::word_score(&word) {
            let value = if negated_for > 0 { -base } else { base };
            total += value;
            hits += 1;
        }

        negated_for = negated_for.saturating_sub(1);
    }

    if hits == 0 || tokens == 0 {
        return Sentiment {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    Sentiment {
        polarity: (total / hits as f64).clamp(-1.0, 1.0),
        subjectivity: (hits as f64 / tokens as f64).clamp(0.0, 1.0),
    }
}

/// Bucket a polarity value: positive iff > 0, negative iff < 0, neutral at 0.
pub fn classify(polarity: f64) -> SentimentLabel {
    if polarity > 0.0 {
        SentimentLabel::Positive
    } else if polarity < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
