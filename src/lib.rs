#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. TableError in table module
    clippy::must_use_candidate       // Annotated selectively on core APIs
)]

pub mod api;
pub mod app;
pub mod classification;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod pipeline;
pub mod table;
pub mod text;

pub use classification::{KeywordDictionary, KeywordMatcher, UNCATEGORIZED, classify};
pub use config::{Config, ConfigError};
pub use domain::{ContextValue, Fragment, MissingContext, PostRecord, StatementRow};
pub use error::AppError;
pub use pipeline::{TableTransformer, TransformOptions, TransformReport, transform};
pub use text::segment;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
