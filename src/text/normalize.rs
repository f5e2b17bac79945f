/// Characters that close a sentence.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Collapse every whitespace run to a single space and trim both ends.
#[must_use]
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `input` is non-empty and made only of `.`, `!` and `?`.
#[must_use]
pub fn is_terminal_punctuation_only(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| TERMINAL_PUNCTUATION.contains(&c))
}

/// Clean one raw segment, returning `None` when nothing worth keeping remains.
#[must_use]
pub fn clean_fragment(raw: &str) -> Option<String> {
    let cleaned = collapse_whitespace(raw);
    if cleaned.is_empty() || is_terminal_punctuation_only(&cleaned) {
        None
    } else {
        Some(cleaned)
    }
}
