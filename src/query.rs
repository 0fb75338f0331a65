//! The listing filter/sort pipeline: given the full post collection, a
//! free-text query, and a [`SortMode`], produce the ordered subset to
//! display. The input collection is never mutated; the result is an owned
//! copy.

use crate::post::{PostRecord, DATE_FORMAT};
use chrono::NaiveDate;
use std::str::FromStr;

/// How the listing orders its results. Anything other than `new`/`old`
/// parses to [`SortMode::Unsorted`], which leaves the relative order of the
/// collection untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    /// Newest first (date descending). The listing's default.
    New,

    /// Oldest first (date ascending).
    Old,

    /// Keep the collection's own order.
    Unsorted,
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "new" => SortMode::New,
            "old" => SortMode::Old,
            _ => SortMode::Unsorted,
        })
    }
}

/// Filters and sorts the collection for display.
///
/// The trimmed, case-folded query must appear in the case-folded title,
/// excerpt, or any tag for an entry to survive; an empty query keeps
/// everything. Survivors are then ordered per `mode`.
pub fn select(posts: &[PostRecord], query: &str, mode: SortMode) -> Vec<PostRecord> {
    let term = query.trim().to_lowercase();
    let mut list: Vec<PostRecord> = posts
        .iter()
        .filter(|post| term.is_empty() || matches(post, &term))
        .cloned()
        .collect();
    sort_by_date(&mut list, mode);
    list
}

/// Whether `term` (already trimmed and case-folded, non-empty) appears in
/// the post's title, excerpt, or tags.
fn matches(post: &PostRecord, term: &str) -> bool {
    post.title.to_lowercase().contains(term)
        || post.excerpt.to_lowercase().contains(term)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Reorders `list` by parsed date. Entries whose dates don't parse are
/// neither greater nor less than anything: they hold their original
/// positions and only the parseable entries are reordered among themselves.
/// (Sorting with a comparator that returns `Equal` for unparseable dates
/// would violate transitivity, so the dated entries are extracted, sorted,
/// and written back over the same slots instead.)
fn sort_by_date(list: &mut [PostRecord], mode: SortMode) {
    if mode == SortMode::Unsorted {
        return;
    }

    let mut slots: Vec<usize> = Vec::with_capacity(list.len());
    let mut dated: Vec<(NaiveDate, PostRecord)> = Vec::with_capacity(list.len());
    for (i, post) in list.iter().enumerate() {
        if let Some(date) = parse_date(&post.date) {
            slots.push(i);
            dated.push((date, post.clone()));
        }
    }

    match mode {
        SortMode::Old => dated.sort_by(|a, b| a.0.cmp(&b.0)),
        _ => dated.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    for (slot, (_, post)) in slots.into_iter().zip(dated) {
        list[slot] = post;
    }
}
