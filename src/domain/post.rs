use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Text a missing caption is coerced to under [`MissingContext::Literal`].
pub const MISSING_CONTEXT_LITERAL: &str = "nan";

/// How a missing caption cell is turned into text before segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingContext {
    /// Coerce to the literal placeholder `"nan"` (legacy behaviour)
    #[default]
    Literal,
    /// Coerce to empty text, so the row yields no statements
    Empty,
}

/// Raw caption cell as read from the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    Missing,
}

impl ContextValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, ContextValue::Missing)
    }

    /// Coerce the cell to text. Never fails; missing values follow `policy`.
    #[must_use]
    pub fn to_text(&self, policy: MissingContext) -> Cow<'_, str> {
        match self {
            ContextValue::Text(text) => Cow::Borrowed(text.as_str()),
            ContextValue::Missing => match policy {
                MissingContext::Literal => Cow::Borrowed(MISSING_CONTEXT_LITERAL),
                MissingContext::Empty => Cow::Borrowed(""),
            },
        }
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<Option<String>> for ContextValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ContextValue::Missing, ContextValue::Text)
    }
}

/// One input row: an opaque post identifier and its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub context: ContextValue,
}

impl PostRecord {
    pub fn new(id: impl Into<String>, context: impl Into<ContextValue>) -> Self {
        Self {
            id: id.into(),
            context: context.into(),
        }
    }

    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context: ContextValue::Missing,
        }
    }
}
