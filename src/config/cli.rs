use super::{ConfigError, LogFormat, LogLevel};
use crate::classification::{DictionaryError, KeywordDictionary};
use crate::domain::MissingContext;
use crate::pipeline::TransformOptions;
use crate::table::{ColumnSelection, DEFAULT_CONTEXT_COLUMN, DEFAULT_ID_COLUMN};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (RUST_LOG directives take precedence)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, env = "RUST_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split the captions of a CSV file into statements
    Process(ProcessArgs),
    /// List the columns available in a CSV file
    Columns(ColumnsArgs),
    /// Print the built-in keyword dictionary as JSON
    Keywords,
    /// Serve the HTTP API
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Input CSV file ("-" reads stdin)
    #[arg(long, short, env = "CAPTION_SPLITTER_INPUT")]
    pub input: PathBuf,

    /// Output CSV file (stdout when omitted or "-")
    #[arg(long, short, env = "CAPTION_SPLITTER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Column holding the post identifier
    #[arg(long, env = "CAPTION_SPLITTER_ID_COLUMN", default_value = DEFAULT_ID_COLUMN)]
    pub id_column: String,

    /// Column holding the caption text
    #[arg(long, env = "CAPTION_SPLITTER_CONTEXT_COLUMN", default_value = DEFAULT_CONTEXT_COLUMN)]
    pub context_column: String,

    /// Keep hashtags inside the sentence they appear in
    #[arg(long, env = "CAPTION_SPLITTER_NO_HASHTAGS")]
    pub no_hashtags: bool,

    /// Tag every statement with a keyword category
    #[arg(long, env = "CAPTION_SPLITTER_CLASSIFY")]
    pub classify: bool,

    /// Copy the raw caption into a Context column
    #[arg(long, env = "CAPTION_SPLITTER_INCLUDE_CONTEXT")]
    pub include_context: bool,

    /// Keyword dictionary file (JSON object of category -> keyword list)
    #[arg(long, env = "CAPTION_SPLITTER_KEYWORDS", conflicts_with = "keywords_json")]
    pub keywords: Option<PathBuf>,

    /// Keyword dictionary given inline as JSON text
    #[arg(long, env = "CAPTION_SPLITTER_KEYWORDS_JSON")]
    pub keywords_json: Option<String>,

    /// How empty or NA caption cells are coerced to text
    #[arg(
        long,
        env = "CAPTION_SPLITTER_MISSING_CONTEXT",
        value_enum,
        default_value_t = MissingContext::Literal
    )]
    pub missing_context: MissingContext,

    /// Number of result rows echoed to stderr (0 disables the preview)
    #[arg(long, env = "CAPTION_SPLITTER_PREVIEW", default_value = "5")]
    pub preview: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ColumnsArgs {
    /// Input CSV file ("-" reads stdin)
    #[arg(long, short, env = "CAPTION_SPLITTER_INPUT")]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, env = "CAPTION_SPLITTER_BIND", default_value = "0.0.0.0:9700")]
    pub bind: SocketAddr,

    /// Default id column for requests that do not name one
    #[arg(long, env = "CAPTION_SPLITTER_ID_COLUMN", default_value = DEFAULT_ID_COLUMN)]
    pub id_column: String,

    /// Default caption column for requests that do not name one
    #[arg(long, env = "CAPTION_SPLITTER_CONTEXT_COLUMN", default_value = DEFAULT_CONTEXT_COLUMN)]
    pub context_column: String,

    /// Default keyword dictionary file for requests that do not supply one
    #[arg(long, env = "CAPTION_SPLITTER_KEYWORDS")]
    pub keywords: Option<PathBuf>,
}

impl Config {
    /// Parse and validate command-line arguments.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }
}

impl ProcessArgs {
    #[must_use]
    pub fn column_selection(&self) -> ColumnSelection {
        ColumnSelection::new(self.id_column.clone(), self.context_column.clone())
    }

    #[must_use]
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            include_hashtags: !self.no_hashtags,
            classify: self.classify,
            include_context: self.include_context,
            missing_context: self.missing_context,
        }
    }

    /// True when a keyword dictionary was supplied on the command line or env.
    #[must_use]
    pub fn has_dictionary(&self) -> bool {
        self.keywords.is_some() || self.keywords_json.is_some()
    }

    /// Load the configured dictionary, substituting the default when it is unusable.
    ///
    /// clap rejects `--keywords` together with `--keywords-json`.
    pub fn resolve_dictionary(
        &self,
    ) -> Result<(KeywordDictionary, Option<DictionaryError>), ConfigError> {
        match (&self.keywords, &self.keywords_json) {
            (Some(path), _) => load_dictionary(path),
            (None, Some(text)) => Ok(KeywordDictionary::resolve(text)),
            (None, None) => Ok((KeywordDictionary::default(), None)),
        }
    }
}

impl ServeArgs {
    #[must_use]
    pub fn column_selection(&self) -> ColumnSelection {
        ColumnSelection::new(self.id_column.clone(), self.context_column.clone())
    }

    pub fn resolve_dictionary(
        &self,
    ) -> Result<(KeywordDictionary, Option<DictionaryError>), ConfigError> {
        match &self.keywords {
            Some(path) => load_dictionary(path),
            None => Ok((KeywordDictionary::default(), None)),
        }
    }
}

/// Read a dictionary file.
///
/// Only an unreadable file is an error; malformed content falls back to the
/// built-in dictionary and is reported in the second tuple element.
pub fn load_dictionary(
    path: &Path,
) -> Result<(KeywordDictionary, Option<DictionaryError>), ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::KeywordsFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(KeywordDictionary::resolve(&text))
}
