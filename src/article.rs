//! Article records
//!
//! Mirrors the NewsAPI article shape. Fields the provider sends as `null`
//! are read as empty so one bad record never rejects a whole list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NewsError;
use crate::text::parse_timestamp;

/// Where an article was published
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Provider identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single news article
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Publishing source
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
    /// Headline
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Summary, absent for some providers
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Raw publish timestamp as sent by the provider
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
}

impl Article {
    /// Parsed publish instant, `None` when the timestamp is unparseable
    #[must_use]
    pub fn published(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

/// NewsAPI response envelope
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<Article>),
    Response(ApiResponse),
}

/// Parse an article list from JSON.
///
/// Accepts a bare array of articles or a NewsAPI response object. A response
/// whose `status` is `"error"` becomes [`NewsError::Upstream`].
pub fn parse_articles(json: &str) -> Result<Vec<Article>, NewsError> {
    match serde_json::from_str::<Payload>(json)? {
        Payload::List(articles) => Ok(articles),
        Payload::Response(response) if response.status == "error" => Err(NewsError::Upstream {
            code: response.code.unwrap_or_default(),
            message: response
                .message
                .unwrap_or_else(|| "The news provider returned an error.".to_string()),
        }),
        Payload::Response(response) => Ok(response.articles),
    }
}

/// Sort articles by publish time into a new list, leaving the input untouched.
///
/// Oldest first; `reverse` gives newest first by reversing the ascending
/// order. Unparseable timestamps sort before every valid one and keep their
/// input order among themselves.
#[must_use]
pub fn sort_articles(articles: &[Article], reverse: bool) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by_key(|article| article.published());
    if reverse {
        sorted.reverse();
    }
    sorted
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_article;
    use proptest::prelude::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{
            "source": {"id": null, "name": "BBC News"},
            "title": "Headline",
            "description": "Summary",
            "url": "https://bbc.co.uk/1",
            "publishedAt": "2018-01-04T15:04:05Z"
        }]"#;
        let articles = parse_articles(json).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source.name, "BBC News");
        assert_eq!(articles[0].source.id, None);
        assert_eq!(articles[0].description.as_deref(), Some("Summary"));
        assert!(articles[0].published().is_some());
    }

    #[test]
    fn test_parse_tolerates_nulls_and_missing_fields() {
        let json = r#"[{"title": null, "description": null, "url": "u"}]"#;
        let articles = parse_articles(json).unwrap();
        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].description, None);
        assert_eq!(articles[0].source, Source::default());
        assert_eq!(articles[0].published(), None);
    }

    #[test]
    fn test_parse_ok_response() {
        let json = r#"{"status": "ok", "totalResults": 1, "articles": [{"title": "T"}]}"#;
        let articles = parse_articles(json).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "T");
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"status": "error", "code": "rateLimited", "message": "Too many requests"}"#;
        match parse_articles(json) {
            Err(NewsError::Upstream { code, message }) => {
                assert_eq!(code, "rateLimited");
                assert_eq!(message, "Too many requests");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_articles("not json"), Err(NewsError::Json(_))));
    }

    #[test]
    fn test_sort_ascending_and_reverse() {
        let articles = vec![
            make_test_article("b", "2018-01-02T00:00:00Z"),
            make_test_article("c", "2018-01-03T00:00:00Z"),
            make_test_article("a", "2018-01-01T00:00:00Z"),
        ];
        let titles = |sorted: Vec<&Article>| -> Vec<String> {
            sorted.iter().map(|a| a.title.clone()).collect()
        };
        assert_eq!(titles(sort_articles(&articles, false)), ["a", "b", "c"]);
        assert_eq!(titles(sort_articles(&articles, true)), ["c", "b", "a"]);
        // Input is untouched
        assert_eq!(articles[0].title, "b");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let articles = vec![
            make_test_article("first", "2018-01-01T00:00:00Z"),
            make_test_article("second", "2018-01-01T00:00:00Z"),
        ];
        let sorted = sort_articles(&articles, false);
        assert_eq!(sorted[0].title, "first");
        assert_eq!(sorted[1].title, "second");
    }

    #[test]
    fn test_sort_unparseable_first() {
        let articles = vec![
            make_test_article("dated", "2018-01-01T00:00:00Z"),
            make_test_article("undated", "garbage"),
        ];
        assert_eq!(sort_articles(&articles, false)[0].title, "undated");
    }

    proptest! {
        #[test]
        fn prop_reverse_equals_ascending_reversed(
            days in prop::collection::vec(1u32..28, 0..20),
        ) {
            let articles: Vec<Article> = days
                .iter()
                .enumerate()
                .map(|(i, day)| make_test_article(&i.to_string(), &format!("2018-01-{day:02}T00:00:00Z")))
                .collect();
            let mut ascending = sort_articles(&articles, false);
            ascending.reverse();
            prop_assert_eq!(ascending, sort_articles(&articles, true));
        }
    }
}
