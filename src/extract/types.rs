use serde::Serialize;
use thiserror::Error;

/// Output column names, in the order they appear in every row.
pub const COLUMNS: [&str; 18] = [
    "created_at",
    "source",
    "original_text",
    "clean_text",
    "polarity",
    "subjectivity",
    "lang",
    "favorite_count",
    "retweet_count",
    "original_author",
    "followers_count",
    "friends_count",
    "possibly_sensitive",
    "hashtags",
    "user_mentions",
    "location",
    "place",
    "place_coord_boundaries",
];

/// One flattened tweet - a single row of the output table.
///
/// `None` is the sentinel for an absent optional field and renders as an
/// empty CSV cell. Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetRow {
    pub created_at: String,
    pub source: String,
    pub original_text: String,
    /// Cleaned retweet text; empty when the tweet is not a retweet.
    pub clean_text: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub lang: String,
    /// Favorite count of the retweeted status; 0 when not a retweet.
    pub favorite_count: i64,
    pub retweet_count: i64,
    pub original_author: String,
    pub followers_count: i64,
    pub friends_count: i64,
    /// Only an explicit `true` survives; `false`, `null` and absent all
    /// collapse to `None`.
    pub possibly_sensitive: Option<bool>,
    /// Text of the first hashtag, if any.
    pub hashtags: Option<String>,
    /// This record's mention screen names, comma-joined; empty when none.
    pub user_mentions: String,
    pub location: Option<String>,
    pub place: Option<String>,
    pub place_coord_boundaries: Option<String>,
}

/// The flattened result: one row per input record, in input order.
#[derive(Debug, Clone, Default)]
pub struct TweetTable {
    pub rows: Vec<TweetRow>,
}

impl TweetTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Errors from the extraction pass. Any of these aborts the whole run;
/// there is no partial table output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("record {index}: missing required field `{path}`")]
    MissingField { index: usize, path: &'static str },

    #[error("record {index}: field `{path}` has an unexpected type")]
    WrongType { index: usize, path: &'static str },
}
