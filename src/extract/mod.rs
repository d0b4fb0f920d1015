//! Tweet flattening - extract raw tweet JSON into a fixed-schema table
//!
//! This module turns deeply nested, inconsistently populated tweet records
//! into flat rows with a fixed 18-column schema, applying one extraction
//! rule per column. Mandatory fields abort the run when absent; optional
//! fields fall back to a typed sentinel.

pub mod extractor;
pub mod types;
pub mod writer;

pub use extractor::TweetExtractor;
pub use types::{ExtractError, TweetRow, TweetTable, COLUMNS};
pub use writer::{write_csv, write_table};
