//! # Tweetflat - Tweet Flattening Toolkit
//!
//! A library for flattening line-delimited tweet JSON into a fixed-schema
//! table with lexicon-based sentiment scoring, suitable for CSV export and
//! downstream analysis.
//!
//! ## Modules
//!
//! - **extract**: Flatten nested tweet records into 18 fixed columns
//! - **sentiment**: Score free text into (polarity, subjectivity) and a label
//!
//! ## Quick Start
//!
//! ```rust
//! use tweetflat::TweetExtractor;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let record = json!({
//!     "created_at": "Mon Jun 01 10:00:00 +0000 2020",
//!     "source": "web",
//!     "full_text": "what a great day",
//!     "lang": "en",
//!     "user": {
//!         "statuses_count": 100,
//!         "screen_name": "someone",
//!         "followers_count": 42,
//!         "friends_count": 7,
//!         "location": "Nairobi"
//!     },
//!     "entities": {"hashtags": [], "user_mentions": []},
//!     "place": null,
//!     "coordinates": null
//! });
//!
//! let table = TweetExtractor::new(vec![record]).build_table()?;
//! assert_eq!(table.len(), 1);
//! assert!(table.rows[0].polarity > 0.0);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::BufRead;

pub mod extract;
pub mod sentiment;

// Re-export commonly used types for convenience
pub use extract::{
    write_csv, write_table, ExtractError, TweetExtractor, TweetRow, TweetTable, COLUMNS,
};
pub use sentiment::{classify, score, Sentiment, SentimentLabel};

/// Read newline-delimited JSON records, one per non-blank line.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Value>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).context("Failed to parse JSON record")?;
        records.push(value);
    }

    Ok(records)
}

/// Main entry point: flatten a stream of line-delimited tweet JSON into a table.
pub fn flatten_json<R: BufRead>(reader: R) -> Result<TweetTable> {
    let records = read_records(reader)?;
    let table = TweetExtractor::new(records).build_table()?;
    Ok(table)
}
