use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::DictionaryError;

/// Built-in dictionary used when none is supplied or the supplied one is unusable.
pub static DEFAULT_DICTIONARY: Lazy<KeywordDictionary> = Lazy::new(|| {
    let seed: [(&str, [&str; 5]); 4] = [
        ("Fashion", ["fashion", "outfit", "style", "ootd", "wear"]),
        ("Food", ["food", "recipe", "delicious", "foodie", "dinner"]),
        ("Travel", ["travel", "trip", "vacation", "wanderlust", "beach"]),
        ("Fitness", ["fitness", "workout", "gym", "training", "health"]),
    ];
    let categories = seed
        .into_iter()
        .map(|(category, keywords)| {
            (
                category.to_string(),
                keywords.into_iter().map(String::from).collect(),
            )
        })
        .collect();
    KeywordDictionary { categories }
});

/// Ordered category → keywords mapping. Insertion order is match priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordDictionary {
    categories: IndexMap<String, Vec<String>>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        DEFAULT_DICTIONARY.clone()
    }
}

impl KeywordDictionary {
    pub fn new(categories: IndexMap<String, Vec<String>>) -> Result<Self, DictionaryError> {
        if categories.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { categories })
    }

    /// Parse structured text of the form `{"Category": ["kw", ...], ...}`.
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Validate an already-parsed JSON value as an object of string lists.
    pub fn from_json_value(value: &Value) -> Result<Self, DictionaryError> {
        let Value::Object(object) = value else {
            return Err(DictionaryError::Shape(format!(
                "expected an object mapping categories to keyword lists, found {}",
                json_kind(value)
            )));
        };

        let mut categories = IndexMap::with_capacity(object.len());
        for (category, keywords) in object {
            let Value::Array(items) = keywords else {
                return Err(DictionaryError::Shape(format!(
                    "category '{category}' must map to a list, found {}",
                    json_kind(keywords)
                )));
            };
            let keywords = items
                .iter()
                .map(|item| match item {
                    Value::String(keyword) => Ok(keyword.clone()),
                    other => Err(DictionaryError::Shape(format!(
                        "category '{category}' contains a non-string keyword ({})",
                        json_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            categories.insert(category.clone(), keywords);
        }

        Self::new(categories)
    }

    /// Parse `text`, falling back to the built-in dictionary on any error.
    ///
    /// The rejection reason is returned alongside so callers can report it;
    /// processing is never blocked by a bad dictionary.
    pub fn resolve(text: &str) -> (Self, Option<DictionaryError>) {
        Self::fallback(Self::from_json_str(text))
    }

    /// Same as [`KeywordDictionary::resolve`] for a pre-parsed JSON value.
    /// A JSON string is treated as dictionary text.
    pub fn resolve_value(value: &Value) -> (Self, Option<DictionaryError>) {
        match value {
            Value::String(text) => Self::resolve(text),
            other => Self::fallback(Self::from_json_value(other)),
        }
    }

    fn fallback(parsed: Result<Self, DictionaryError>) -> (Self, Option<DictionaryError>) {
        match parsed {
            Ok(dictionary) => (dictionary, None),
            Err(error) => {
                warn!(error = %error, "falling back to default keyword dictionary");
                (Self::default(), Some(error))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
