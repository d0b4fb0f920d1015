//! Lexicon-based sentiment scoring for tweet text
//!
//! Maps free text to a (polarity, subjectivity) pair and buckets polarity
//! into a coarse label. Stateless; the lexicon is a static table.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{classify, score, Sentiment, SentimentLabel};
