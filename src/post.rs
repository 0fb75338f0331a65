//! Defines [`PostRecord`], the shared shape for one blog entry. Records are
//! read from the static `posts.json` collection ([`crate::store`]) and
//! produced by the authoring pipeline ([`crate::write`]).

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// The date format used throughout the collection file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed set of post categories: `(key, label)` pairs. The keys are
/// stable identifiers stored in the collection file; the labels are the
/// Korean display names shown on category badges.
pub const CATEGORIES: [(&str, &str); 4] = [
    ("club", "동아리"),
    ("hackathon", "해커톤"),
    ("project", "프로젝트"),
    ("etc", "기타"),
];

/// A post's category: a stable `key` plus its display `label`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

impl Category {
    /// Resolves a raw category key against [`CATEGORIES`]. Unknown keys fall
    /// back to using the raw key for both fields; the authoring CLI uses a
    /// closed set so this shouldn't happen, but hand-edited collection files
    /// can contain anything.
    pub fn resolve(raw: &str) -> Category {
        match CATEGORIES.iter().find(|(key, _)| *key == raw) {
            Some((key, label)) => Category {
                key: (*key).to_owned(),
                label: (*label).to_owned(),
            },
            None => Category {
                key: raw.to_owned(),
                label: raw.to_owned(),
            },
        }
    }
}

/// One blog entry. Everything except `title` and `date` is defaulted on
/// deserialization because older entries in the collection file are sparse
/// (in particular, some predate tags and categories).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostRecord {
    /// Empty for newly authored records; assigned by hand before the record
    /// is pasted into the collection file.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,

    pub title: String,

    /// Short preview text shown on listing cards.
    #[serde(default)]
    pub excerpt: String,

    /// ISO `YYYY-MM-DD`. Kept as a string; parsing happens at sort time and
    /// unparseable dates are tolerated ([`crate::query`]).
    pub date: String,

    /// An absolute URL, an inline `data:` URI, or a path under the static
    /// assets prefix ([`crate::image`]).
    #[serde(default)]
    pub image: String,

    /// The generated content markup (numbered headings and line breaks).
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl PostRecord {
    /// Serializes the record as the pretty-printed (2-space indented) JSON
    /// block the operator appends to the collection file by hand.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The record's date reformatted as `YYYY.MM.DD` for display. Falls back
    /// to the raw string when the date doesn't parse.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, DATE_FORMAT) {
            Ok(date) => date.format("%Y.%m.%d").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// Hand-edited collection files carry both string and numeric ids, so accept
/// either and normalize to a string (lookups compare ids as strings).
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        String(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::String(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Splits a comma-separated tag string into an ordered tag list. Entries are
/// trimmed and empty entries dropped, so the result never contains empty
/// strings.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The current local date as `YYYY-MM-DD`, the default for new drafts.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            parse_tags(" a, b ,,c ")
        );
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_parse_tags_preserves_order_and_case() {
        assert_eq!(
            vec!["Notice".to_owned(), "Project".to_owned()],
            parse_tags("Notice, Project")
        );
    }

    #[test]
    fn test_resolve_known_category() {
        assert_eq!(
            Category {
                key: "club".to_owned(),
                label: "동아리".to_owned(),
            },
            Category::resolve("club")
        );
    }

    #[test]
    fn test_resolve_unknown_category_falls_back_to_raw_key() {
        assert_eq!(
            Category {
                key: "misc".to_owned(),
                label: "misc".to_owned(),
            },
            Category::resolve("misc")
        );
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let record: PostRecord = serde_json::from_str(
            r#"{"id": 1, "title": "Alpha", "date": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!("1", record.id);
        assert!(record.tags.is_empty());
        assert!(record.category.is_none());
    }

    #[test]
    fn test_serialize_keeps_empty_id() {
        let record = PostRecord {
            id: String::new(),
            title: "Alpha".to_owned(),
            excerpt: String::new(),
            date: "2024-01-01".to_owned(),
            image: String::new(),
            content: String::new(),
            tags: Vec::new(),
            category: Some(Category::resolve("club")),
        };
        let json = record.to_json_pretty().unwrap();
        assert!(json.contains("\"id\": \"\""));
        assert!(json.contains("\"label\": \"동아리\""));
    }

    #[test]
    fn test_display_date() {
        let mut record: PostRecord = serde_json::from_str(
            r#"{"title": "Alpha", "date": "2024-01-05"}"#,
        )
        .unwrap();
        assert_eq!("2024.01.05", record.display_date());
        record.date = "someday".to_owned();
        assert_eq!("someday", record.display_date());
    }
}
