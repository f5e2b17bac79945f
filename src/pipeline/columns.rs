use super::TransformOptions;
use crate::domain::StatementRow;

pub const ID_COLUMN: &str = "ID";
pub const CONTEXT_COLUMN: &str = "Context";
pub const SENTENCE_ID_COLUMN: &str = "Sentence ID";
pub const STATEMENT_COLUMN: &str = "Statement";
pub const CATEGORY_COLUMN: &str = "Category";

/// Column layout of the output table. `ID`, `Sentence ID` and `Statement`
/// are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputColumns {
    pub context: bool,
    pub category: bool,
}

impl OutputColumns {
    #[must_use]
    pub fn from_options(options: &TransformOptions) -> Self {
        Self {
            context: options.include_context,
            category: options.classify,
        }
    }

    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec![ID_COLUMN];
        if self.context {
            headers.push(CONTEXT_COLUMN);
        }
        headers.push(SENTENCE_ID_COLUMN);
        headers.push(STATEMENT_COLUMN);
        if self.category {
            headers.push(CATEGORY_COLUMN);
        }
        headers
    }

    /// Cells for `row` in header order. Absent optional values become blank cells.
    #[must_use]
    pub fn record(&self, row: &StatementRow) -> Vec<String> {
        let mut record = Vec::with_capacity(5);
        record.push(row.id.clone());
        if self.context {
            record.push(row.context.clone().unwrap_or_default());
        }
        record.push(row.sentence_id.to_string());
        record.push(row.statement.clone());
        if self.category {
            record.push(row.category.clone().unwrap_or_default());
        }
        record
    }
}
