use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

use super::TableError;
use crate::domain::{ContextValue, PostRecord};

pub const DEFAULT_ID_COLUMN: &str = "shortcode";
pub const DEFAULT_CONTEXT_COLUMN: &str = "caption";

/// Cell values read as "no value" in the caption column.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Which input columns supply the post id and the caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub id_column: String,
    pub context_column: String,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            id_column: DEFAULT_ID_COLUMN.to_string(),
            context_column: DEFAULT_CONTEXT_COLUMN.to_string(),
        }
    }
}

impl ColumnSelection {
    pub fn new(id_column: impl Into<String>, context_column: impl Into<String>) -> Self {
        Self {
            id_column: id_column.into(),
            context_column: context_column.into(),
        }
    }
}

/// Posts read from a table, together with every column name it exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTable {
    pub columns: Vec<String>,
    pub records: Vec<PostRecord>,
}

/// List the header names of a CSV source.
pub fn read_columns<R: Read>(source: R) -> Result<Vec<String>, TableError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    header_names(reader.headers()?)
}

/// Read posts, resolving `selection` against the header row.
///
/// Both columns must exist; otherwise nothing is read and
/// [`TableError::MissingColumns`] lists what is absent and what is available.
pub fn read_posts<R: Read>(source: R, selection: &ColumnSelection) -> Result<PostTable, TableError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    let columns = header_names(reader.headers()?)?;

    let position = |name: &str| columns.iter().position(|column| column == name);
    let (id_idx, context_idx) = match (
        position(&selection.id_column),
        position(&selection.context_column),
    ) {
        (Some(id_idx), Some(context_idx)) => (id_idx, context_idx),
        (id_idx, context_idx) => {
            let missing = [
                (id_idx, &selection.id_column),
                (context_idx, &selection.context_column),
            ]
            .into_iter()
            .filter(|(idx, _)| idx.is_none())
            .map(|(_, name)| name.clone())
            .collect();
            return Err(TableError::MissingColumns {
                missing,
                available: columns,
            });
        }
    };

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(PostRecord {
            id: record.get(id_idx).unwrap_or_default().to_string(),
            context: context_cell(record.get(context_idx)),
        });
    }

    debug!(
        rows = records.len(),
        id_column = %selection.id_column,
        context_column = %selection.context_column,
        "read input table"
    );

    Ok(PostTable { columns, records })
}

fn header_names(headers: &StringRecord) -> Result<Vec<String>, TableError> {
    if headers.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(headers
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect())
}

fn context_cell(cell: Option<&str>) -> ContextValue {
    match cell {
        Some(value) if !MISSING_MARKERS.contains(&value) => ContextValue::Text(value.to_string()),
        _ => ContextValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn reads_selected_columns_verbatim() {
        let csv = "shortcode,likes,caption\n007,10,\"Hello, world. Bye\"\n";
        let table = read_posts(csv.as_bytes(), &ColumnSelection::default()).expect("table");
        assert_eq!(table.columns, ["shortcode", "likes", "caption"]);
        assert_eq!(
            table.records,
            [PostRecord::new("007", "Hello, world. Bye")]
        );
    }

    #[test]
    fn custom_columns_are_resolved_by_name() {
        let csv = "post,text\nA,hi\n";
        let selection = ColumnSelection::new("post", "text");
        let table = read_posts(csv.as_bytes(), &selection).expect("table");
        assert_eq!(table.records[0].id, "A");
    }

    #[test]
    fn missing_columns_are_reported_with_available_ones() {
        let csv = "shortcode,text\nA,hi\n";
        let error = read_posts(csv.as_bytes(), &ColumnSelection::default()).expect_err("missing");
        match error {
            TableError::MissingColumns { missing, available } => {
                assert_eq!(missing, ["caption"]);
                assert_eq!(available, ["shortcode", "text"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case("shortcode,caption\nA,\n")]
    #[case("shortcode,caption\nA,NaN\n")]
    #[case("shortcode,caption\nA,null\n")]
    #[case("shortcode,caption\nA\n")]
    fn absent_or_marked_captions_are_missing(#[case] csv: &str) {
        let table = read_posts(csv.as_bytes(), &ColumnSelection::default()).expect("table");
        assert!(table.records[0].context.is_missing());
    }

    #[test]
    fn strips_byte_order_mark_from_headers() {
        let csv = "\u{feff}shortcode,caption\nA,b\n";
        assert_eq!(read_columns(csv.as_bytes()).expect("columns"), ["shortcode", "caption"]);
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(read_columns("".as_bytes()), Err(TableError::Empty)));
    }
}
