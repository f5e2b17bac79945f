//! Sentence and hashtag segmentation of captions.
//!
//! Two boundary rules are applied together:
//!
//! * the whitespace run following `.`, `!` or `?` separates two segments and is dropped;
//! * with hashtags enabled, a zero-width boundary sits right before every `#` that is
//!   followed by a non-whitespace character, so hashtag segments keep their `#`.
//!
//! Segments are then cleaned, filtered and numbered from 1.
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

use super::normalize::clean_fragment;
use crate::domain::Fragment;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](\s+)").expect("sentence break pattern"));

/// Split a caption into numbered, cleaned fragments.
///
/// Fragments that are empty or only terminal punctuation after cleaning are
/// dropped before numbering, so ids run `1..=N` without gaps.
#[must_use]
pub fn segment(context: &str, include_hashtags: bool) -> Vec<Fragment> {
    raw_segments(context, include_hashtags)
        .into_iter()
        .filter_map(clean_fragment)
        .zip(1u32..)
        .map(|(text, sentence_id)| Fragment { sentence_id, text })
        .collect()
}

/// Raw pieces between boundaries, uncleaned and possibly empty.
pub(crate) fn raw_segments(text: &str, include_hashtags: bool) -> Vec<&str> {
    let separators = separators(text, include_hashtags);
    let mut pieces = Vec::with_capacity(separators.len() + 1);
    let mut start = 0;
    for separator in separators {
        pieces.push(&text[start..separator.start]);
        start = separator.end;
    }
    pieces.push(&text[start..]);
    pieces
}

/// Byte ranges removed between segments, ordered by position.
/// Hashtag boundaries are empty ranges.
fn separators(text: &str, include_hashtags: bool) -> Vec<Range<usize>> {
    let mut separators: Vec<Range<usize>> = SENTENCE_BREAK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|whitespace| whitespace.range())
        .collect();

    if include_hashtags {
        let mut chars = text.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            if ch == '#' && chars.peek().is_some_and(|&(_, next)| !next.is_whitespace()) {
                separators.push(idx..idx);
            }
        }
        // a '#' is never whitespace, so ranges cannot overlap
        separators.sort_by_key(|range| range.start);
    }

    separators
}
