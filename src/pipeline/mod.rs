//! Row-level orchestration: segment every caption, classify every statement.
pub mod columns;
pub mod transform;

pub use columns::OutputColumns;
pub use transform::{TableTransformer, TransformOptions, TransformOutcome, TransformReport, transform};
