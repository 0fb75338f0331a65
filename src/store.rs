//! Reads the static post collection: a JSON array of [`PostRecord`]s at a
//! fixed path, re-read in full on every command (the collection is small and
//! the file is the single source of truth; nothing is cached). The listing
//! degrades to an empty collection when the file is missing or malformed,
//! and a lookup miss is a normal outcome, not a fault.

use crate::post::PostRecord;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Parses a post collection from a reader holding a JSON array.
pub fn parse_posts(reader: impl Read) -> Result<Vec<PostRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the post collection from `path`.
pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>> {
    parse_posts(File::open(path)?)
}

/// Loads the post collection, logging any failure and degrading to an empty
/// collection so the listing still renders.
pub fn load_posts_or_empty(path: &Path) -> Vec<PostRecord> {
    match load_posts(path) {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Loading post collection `{}`: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Finds a post by id. Ids are compared as strings; see
/// [`PostRecord::id`]'s deserializer for why numeric ids in the file still
/// match.
pub fn find_post<'a>(posts: &'a [PostRecord], id: &str) -> Option<&'a PostRecord> {
    posts.iter().find(|post| post.id == id)
}

/// The result of a fallible collection-loading operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading the post collection.
#[derive(Debug)]
pub enum Error {
    /// An error reading the collection file.
    Io(io::Error),

    /// An error parsing the collection file's JSON.
    Parse(serde_json::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    /// Converts a [`serde_json::Error`] into an [`Error`]. This allows us to
    /// use the `?` operator for fallible parse operations.
    fn from(err: serde_json::Error) -> Error {
        Error::Parse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Parse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"[
        {"id": 1, "title": "Alpha", "date": "2024-01-01", "tags": ["x"]},
        {"id": "2", "title": "Beta", "date": "2024-06-01", "tags": ["y"]}
    ]"#;

    #[test]
    fn test_parse_posts() {
        let posts = parse_posts(COLLECTION.as_bytes()).unwrap();
        assert_eq!(2, posts.len());
        assert_eq!("Alpha", posts[0].title);
    }

    #[test]
    fn test_find_post_matches_numeric_id_as_string() {
        let posts = parse_posts(COLLECTION.as_bytes()).unwrap();
        assert_eq!("Alpha", find_post(&posts, "1").unwrap().title);
        assert_eq!("Beta", find_post(&posts, "2").unwrap().title);
    }

    #[test]
    fn test_find_post_miss_is_none() {
        let posts = parse_posts(COLLECTION.as_bytes()).unwrap();
        assert!(find_post(&posts, "999").is_none());
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        assert!(matches!(
            parse_posts("not json".as_bytes()),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        assert!(load_posts_or_empty(Path::new("/no/such/posts.json")).is_empty());
    }
}
