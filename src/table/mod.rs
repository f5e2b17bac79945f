//! CSV boundary of the transform: posts in, statements out.
pub mod reader;
pub mod writer;

use thiserror::Error;

pub use reader::{
    ColumnSelection, DEFAULT_CONTEXT_COLUMN, DEFAULT_ID_COLUMN, PostTable, read_columns, read_posts,
};
pub use writer::{
    ATTACHMENT_DISPOSITION, CSV_CONTENT_TYPE, OUTPUT_FILE_NAME, statements_to_csv, write_statements,
};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("missing required column(s) {missing:?}; available columns: {available:?}")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("input table has no header row")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// True for errors caused by the caller's column choice rather than the data.
    pub fn is_configuration(&self) -> bool {
        matches!(self, TableError::MissingColumns { .. })
    }
}
