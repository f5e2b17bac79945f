use serde::{Deserialize, Serialize};

/// A cleaned sentence or hashtag token cut from one caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// 1-based position within the caption, counting surviving fragments only
    pub sentence_id: u32,
    pub text: String,
}

/// One output row of the flattened table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub sentence_id: u32,
    pub statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
