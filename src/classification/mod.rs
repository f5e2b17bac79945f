//! Keyword-driven statement categorisation.
//!
//! A [`KeywordDictionary`] is an ordered list of categories, each with keywords.
//! A statement gets the first category (in dictionary order) with any keyword
//! occurring in it as a case-insensitive substring, or [`UNCATEGORIZED`].
pub mod keywords;
pub mod matcher;

use thiserror::Error;

pub use keywords::{DEFAULT_DICTIONARY, KeywordDictionary};
pub use matcher::KeywordMatcher;

/// Category assigned when no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Why a supplied dictionary was rejected.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("keyword dictionary is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("keyword dictionary has the wrong shape: {0}")]
    Shape(String),

    #[error("keyword dictionary has no categories")]
    Empty,
}

/// Classify one statement against `dictionary`.
///
/// Builds a matcher for a single lookup; use [`KeywordMatcher`] directly when
/// classifying many statements with the same dictionary.
#[must_use]
pub fn classify(fragment: &str, dictionary: &KeywordDictionary) -> String {
    KeywordMatcher::new(dictionary).classify(fragment).to_string()
}
