use crate::classification::KeywordDictionary;
use crate::table::ColumnSelection;

/// Read-only defaults shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub default_dictionary: KeywordDictionary,
    pub default_columns: ColumnSelection,
}

impl AppState {
    pub fn new(default_dictionary: KeywordDictionary, default_columns: ColumnSelection) -> Self {
        Self {
            default_dictionary,
            default_columns,
        }
    }
}
