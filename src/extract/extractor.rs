use crate::extract::types::{ExtractError, TweetRow, TweetTable};
use crate::sentiment;
use serde_json::Value;

/// The core extractor: owns the raw record list and applies one extraction
/// rule per output column, uniformly across all records.
pub struct TweetExtractor {
    records: Vec<Value>,
}

impl TweetExtractor {
    pub fn new(records: Vec<Value>) -> Self {
        TweetExtractor { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Walk a mandatory key path; absence at any level is a hard error.
    fn require<'a>(
        record: &'a Value,
        index: usize,
        path: &'static str,
        keys: &[&str],
    ) -> Result<&'a Value, ExtractError> {
        let mut value = record;
        for key in keys {
            value = value
                .get(key)
                .ok_or(ExtractError::MissingField { index, path })?;
        }
        Ok(value)
    }

    /// Walk an optional key path; absence at any level yields `None`.
    fn lookup<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
        let mut value = record;
        for key in keys {
            value = value.get(key)?;
        }
        Some(value)
    }

    fn required_string(
        &self,
        path: &'static str,
        keys: &[&str],
    ) -> Result<Vec<String>, ExtractError> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Self::require(record, index, path, keys)?
                    .as_str()
                    .map(str::to_owned)
                    .ok_or(ExtractError::WrongType { index, path })
            })
            .collect()
    }

    fn required_i64(&self, path: &'static str, keys: &[&str]) -> Result<Vec<i64>, ExtractError> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Self::require(record, index, path, keys)?
                    .as_i64()
                    .ok_or(ExtractError::WrongType { index, path })
            })
            .collect()
    }

    /// Mandatory top-level value per record, rendered for a table cell:
    /// `null` becomes `None`, strings pass through, anything else is kept
    /// as its compact JSON text.
    fn required_rendered(
        &self,
        path: &'static str,
        keys: &[&str],
    ) -> Result<Vec<Option<String>>, ExtractError> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let value = Self::require(record, index, path, keys)?;
                Ok(match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
            })
            .collect()
    }

    pub fn created_at(&self) -> Result<Vec<String>, ExtractError> {
        self.required_string("created_at", &["created_at"])
    }

    pub fn source(&self) -> Result<Vec<String>, ExtractError> {
        self.required_string("source", &["source"])
    }

    pub fn original_text(&self) -> Result<Vec<String>, ExtractError> {
        self.required_string("full_text", &["full_text"])
    }

    pub fn lang(&self) -> Result<Vec<String>, ExtractError> {
        self.required_string("lang", &["lang"])
    }

    pub fn screen_name(&self) -> Result<Vec<String>, ExtractError> {
        self.required_string("user.screen_name", &["user", "screen_name"])
    }

    /// Mandatory in the source schema even though no output column carries it.
    pub fn statuses_count(&self) -> Result<Vec<i64>, ExtractError> {
        self.required_i64("user.statuses_count", &["user", "statuses_count"])
    }

    pub fn followers_count(&self) -> Result<Vec<i64>, ExtractError> {
        self.required_i64("user.followers_count", &["user", "followers_count"])
    }

    pub fn friends_count(&self) -> Result<Vec<i64>, ExtractError> {
        self.required_i64("user.friends_count", &["user", "friends_count"])
    }

    /// Cleaned text of the retweeted status; empty for non-retweets.
    pub fn clean_text(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| {
                Self::lookup(record, &["retweeted_status", "extended_tweet", "clean_text"])
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_owned()
            })
            .collect()
    }

    pub fn favorite_count(&self) -> Vec<i64> {
        self.optional_retweet_count("favorite_count")
    }

    pub fn retweet_count(&self) -> Vec<i64> {
        self.optional_retweet_count("retweet_count")
    }

    fn optional_retweet_count(&self, key: &str) -> Vec<i64> {
        self.records
            .iter()
            .map(|record| {
                Self::lookup(record, &["retweeted_status", key])
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Only an explicit `true` survives; absent, `null` and `false` all
    /// normalize to `None`.
    pub fn is_sensitive(&self) -> Vec<Option<bool>> {
        self.records
            .iter()
            .map(|record| {
                match Self::lookup(record, &["retweeted_status", "possibly_sensitive"])
                    .and_then(Value::as_bool)
                {
                    Some(true) => Some(true),
                    _ => None,
                }
            })
            .collect()
    }

    /// Text of the first hashtag; `None` when the path is absent or the
    /// list is empty.
    pub fn hashtags(&self) -> Vec<Option<String>> {
        self.records
            .iter()
            .map(|record| {
                Self::lookup(record, &["entities", "hashtags"])
                    .and_then(Value::as_array)
                    .and_then(|tags| tags.first())
                    .and_then(|tag| tag.get("text"))
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .collect()
    }

    /// Mention screen names per record. `entities.user_mentions` must be
    /// present as a list (possibly empty) on every record.
    pub fn mentions_by_record(&self) -> Result<Vec<Vec<String>>, ExtractError> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mentions =
                    Self::require(record, index, "entities.user_mentions", &["entities", "user_mentions"])?
                        .as_array()
                        .ok_or(ExtractError::WrongType {
                            index,
                            path: "entities.user_mentions",
                        })?;

                mentions
                    .iter()
                    .map(|mention| {
                        mention
                            .get("screen_name")
                            .and_then(Value::as_str)
                            .map(str::to_owned)
                            .ok_or(ExtractError::MissingField {
                                index,
                                path: "entities.user_mentions.screen_name",
                            })
                    })
                    .collect()
            })
            .collect()
    }

    /// All mention screen names pooled across the whole input, in record
    /// order, with no boundary between records.
    pub fn mentions(&self) -> Result<Vec<String>, ExtractError> {
        Ok(self.mentions_by_record()?.into_iter().flatten().collect())
    }

    /// User-profile location, per record; missing or non-string is `None`.
    pub fn location(&self) -> Vec<Option<String>> {
        self.records
            .iter()
            .map(|record| {
                Self::lookup(record, &["user", "location"])
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .collect()
    }

    pub fn place(&self) -> Result<Vec<Option<String>>, ExtractError> {
        self.required_rendered("place", &["place"])
    }

    pub fn coordinates(&self) -> Result<Vec<Option<String>>, ExtractError> {
        self.required_rendered("coordinates", &["coordinates"])
    }

    /// Run every extraction rule, score sentiment over the original text and
    /// zip the columns into rows. All-or-nothing: the first unrecovered
    /// missing-field error aborts the run with no partial table.
    pub fn build_table(&self) -> Result<TweetTable, ExtractError> {
        // Not emitted, but mandatory in the source schema: its absence must
        // abort the run like any other required field.
        self.statuses_count()?;

        let created_at = self.created_at()?;
        let source = self.source()?;
        let original_text = self.original_text()?;
        let clean_text = self.clean_text();
        let lang = self.lang()?;
        let favorite_count = self.favorite_count();
        let retweet_count = self.retweet_count();
        let original_author = self.screen_name()?;
        let followers_count = self.followers_count()?;
        let friends_count = self.friends_count()?;
        let possibly_sensitive = self.is_sensitive();
        let hashtags = self.hashtags();
        let mentions = self.mentions_by_record()?;
        let location = self.location();
        let place = self.place()?;
        let coordinates = self.coordinates()?;

        let sentiments: Vec<_> = original_text
            .iter()
            .map(|text| sentiment::score(text))
            .collect();

        let rows = (0..self.records.len())
            .map(|i| TweetRow {
                created_at: created_at[i].clone(),
                source: source[i].clone(),
                original_text: original_text[i].clone(),
                clean_text: clean_text[i].clone(),
                polarity: sentiments[i].polarity,
                subjectivity: sentiments[i].subjectivity,
                lang: lang[i].clone(),
                favorite_count: favorite_count[i],
                retweet_count: retweet_count[i],
                original_author: original_author[i].clone(),
                followers_count: followers_count[i],
                friends_count: friends_count[i],
                possibly_sensitive: possibly_sensitive[i],
                hashtags: hashtags[i].clone(),
                user_mentions: mentions[i].join(","),
                location: location[i].clone(),
                place: place[i].clone(),
                place_coord_boundaries: coordinates[i].clone(),
            })
            .collect();

        Ok(TweetTable { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A minimal record carrying every mandatory field.
    fn sample_record(full_text: &str) -> Value {
        json!({
            "created_at": "Mon Jun 01 10:00:00 +0000 2020",
            "source": "<a href=\"https://twitter.com\">Web</a>",
            "full_text": full_text,
            "lang": "en",
            "user": {
                "statuses_count": 100,
                "screen_name": "someone",
                "followers_count": 42,
                "friends_count": 7,
                "location": "Nairobi"
            },
            "entities": {
                "hashtags": [],
                "user_mentions": []
            },
            "place": null,
            "coordinates": null
        })
    }

    #[test]
    fn test_row_per_record() {
        let records = vec![
            sample_record("first"),
            sample_record("second"),
            sample_record("third"),
        ];
        let table = TweetExtractor::new(records).build_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].original_text, "first");
        assert_eq!(table.rows[2].original_text, "third");
    }

    #[test]
    fn test_retweet_defaults_when_not_a_retweet() {
        let table = TweetExtractor::new(vec![sample_record("plain tweet")])
            .build_table()
            .unwrap();
        let row = &table.rows[0];
        assert_eq!(row.favorite_count, 0);
        assert_eq!(row.retweet_count, 0);
        assert_eq!(row.clean_text, "");
        assert_eq!(row.possibly_sensitive, None);
    }

    #[test]
    fn test_retweet_fields_extracted() {
        let mut record = sample_record("rt");
        record["retweeted_status"] = json!({
            "favorite_count": 12,
            "retweet_count": 5,
            "possibly_sensitive": true,
            "extended_tweet": {"clean_text": "cleaned"}
        });

        let table = TweetExtractor::new(vec![record]).build_table().unwrap();
        let row = &table.rows[0];
        assert_eq!(row.favorite_count, 12);
        assert_eq!(row.retweet_count, 5);
        assert_eq!(row.clean_text, "cleaned");
        assert_eq!(row.possibly_sensitive, Some(true));
    }

    #[test]
    fn test_explicit_false_sensitivity_is_suppressed() {
        let mut record = sample_record("rt");
        record["retweeted_status"] = json!({"possibly_sensitive": false});

        let extractor = TweetExtractor::new(vec![record]);
        assert_eq!(extractor.is_sensitive(), vec![None]);
    }

    #[test]
    fn test_hashtags_take_first_element() {
        let mut record = sample_record("tagged");
        record["entities"]["hashtags"] = json!([{"text": "a"}, {"text": "b"}]);

        let extractor = TweetExtractor::new(vec![record, sample_record("bare")]);
        assert_eq!(
            extractor.hashtags(),
            vec![Some("a".to_owned()), None]
        );
    }

    #[test]
    fn test_missing_statuses_count_aborts() {
        let mut record = sample_record("broken");
        record["user"].as_object_mut().unwrap().remove("statuses_count");

        let err = TweetExtractor::new(vec![sample_record("fine"), record])
            .build_table()
            .unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingField {
                index: 1,
                path: "user.statuses_count"
            }
        );
    }

    #[test]
    fn test_missing_top_level_field_aborts() {
        let mut record = sample_record("broken");
        record.as_object_mut().unwrap().remove("created_at");

        let err = TweetExtractor::new(vec![record]).build_table().unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingField {
                index: 0,
                path: "created_at"
            }
        );
    }

    #[test]
    fn test_mentions_pool_across_records() {
        let mut first = sample_record("one");
        first["entities"]["user_mentions"] =
            json!([{"screen_name": "a"}, {"screen_name": "b"}]);
        let mut second = sample_record("two");
        second["entities"]["user_mentions"] = json!([{"screen_name": "c"}]);

        let extractor = TweetExtractor::new(vec![first, second]);
        assert_eq!(extractor.mentions().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(
            extractor.mentions_by_record().unwrap(),
            vec![vec!["a".to_owned(), "b".to_owned()], vec!["c".to_owned()]]
        );
    }

    #[test]
    fn test_mentions_column_is_record_aligned() {
        let mut first = sample_record("one");
        first["entities"]["user_mentions"] =
            json!([{"screen_name": "a"}, {"screen_name": "b"}]);
        let second = sample_record("two");

        let table = TweetExtractor::new(vec![first, second])
            .build_table()
            .unwrap();
        assert_eq!(table.rows[0].user_mentions, "a,b");
        assert_eq!(table.rows[1].user_mentions, "");
    }

    #[test]
    fn test_location_is_per_record_optional() {
        let mut no_location = sample_record("quiet");
        no_location["user"].as_object_mut().unwrap().remove("location");
        let mut null_location = sample_record("nowhere");
        null_location["user"]["location"] = json!(null);

        let extractor =
            TweetExtractor::new(vec![sample_record("here"), no_location, null_location]);
        assert_eq!(
            extractor.location(),
            vec![Some("Nairobi".to_owned()), None, None]
        );
    }

    #[test]
    fn test_place_and_coordinates_rendering() {
        let mut record = sample_record("located");
        record["place"] = json!({"full_name": "Nairobi, Kenya"});
        record["coordinates"] = json!({"type": "Point", "coordinates": [36.8, -1.3]});

        let table = TweetExtractor::new(vec![record, sample_record("nowhere")])
            .build_table()
            .unwrap();
        assert_eq!(
            table.rows[0].place.as_deref(),
            Some(r#"{"full_name":"Nairobi, Kenya"}"#)
        );
        assert!(table.rows[0]
            .place_coord_boundaries
            .as_deref()
            .unwrap()
            .contains("Point"));
        assert_eq!(table.rows[1].place, None);
        assert_eq!(table.rows[1].place_coord_boundaries, None);
    }

    #[test]
    fn test_sentiment_columns() {
        let table = TweetExtractor::new(vec![
            sample_record("great day"),
            sample_record("terrible day"),
        ])
        .build_table()
        .unwrap();
        assert!(table.rows[0].polarity > 0.0);
        assert!(table.rows[1].polarity < 0.0);
    }
}
