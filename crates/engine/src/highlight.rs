//! Case-insensitive match splitting for suggestion emphasis.

use regex::RegexBuilder;
use tracing::warn;

/// A contiguous piece of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, is_match: false }
    }

    fn matched(text: &'a str) -> Self {
        Self { text, is_match: true }
    }
}

/// Split `text` into matched and unmatched segments for `query`.
///
/// Matching is literal (the query is escaped), case-insensitive, leftmost
/// first, non-overlapping and global. Concatenating the segments always
/// reproduces `text`. An empty query yields the whole text unmatched without
/// compiling a pattern.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build() {
        Ok(pattern) => pattern,
        Err(error) => {
            warn!(%error, "highlight pattern rejected; rendering text unmatched");
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last_end {
            segments.push(Segment::plain(&text[last_end..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last_end = found.end();
    }
    if last_end < text.len() {
        segments.push(Segment::plain(&text[last_end..]));
    }
    segments
}
