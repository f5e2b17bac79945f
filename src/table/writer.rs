use csv::{Terminator, WriterBuilder};
use std::io::Write;

use super::TableError;
use crate::domain::StatementRow;
use crate::pipeline::OutputColumns;

/// Suggested file name for the downloadable result.
pub const OUTPUT_FILE_NAME: &str = "ig_posts_transformed_output.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const ATTACHMENT_DISPOSITION: &str = "attachment; filename=\"ig_posts_transformed_output.csv\"";

/// Write statements as UTF-8 CSV with a header row and no index column.
pub fn write_statements<W: Write>(
    sink: W,
    columns: OutputColumns,
    rows: &[StatementRow],
) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);
    writer.write_record(columns.headers())?;
    for row in rows {
        writer.write_record(columns.record(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// In-memory variant of [`write_statements`].
pub fn statements_to_csv(columns: OutputColumns, rows: &[StatementRow]) -> Result<Vec<u8>, TableError> {
    let mut buffer = Vec::new();
    write_statements(&mut buffer, columns, rows)?;
    Ok(buffer)
}
