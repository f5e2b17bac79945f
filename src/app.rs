//! Command dispatch for the `caption-splitter` binary.
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::{self, AppState};
use crate::classification::KeywordDictionary;
use crate::config::{Command, Config, ConfigError, ProcessArgs, ServeArgs};
use crate::error::AppError;
use crate::observability::init_tracing;
use crate::pipeline::{OutputColumns, TableTransformer, TransformOutcome};
use crate::table::{read_columns, read_posts, write_statements};

/// Path argument standing for stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Binary entry point: parse arguments, install logging, run the command.
pub async fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("caption-splitter: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.log_format, config.log_level) {
        eprintln!("caption-splitter: {}", AppError::Telemetry(format!("{e:#}")));
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "caption-splitter failed");
            ExitCode::FAILURE
        }
    }
}

/// Execute the parsed command.
pub async fn run(config: Config) -> Result<(), AppError> {
    match config.command {
        Command::Process(args) => process(&args),
        Command::Columns(args) => write_columns(open_input(&args.input)?, io::stdout().lock()),
        Command::Keywords => write_default_keywords(io::stdout().lock()),
        Command::Serve(args) => serve(&args).await,
    }
}

/// True when `path` is the `-` placeholder for a standard stream.
#[must_use]
pub fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO_PATH)
}

fn process(args: &ProcessArgs) -> Result<(), AppError> {
    // Reading and transforming happen before the output is created, so a
    // bad input leaves no partial file behind.
    let (layout, outcome) = transform_input(args, open_input(&args.input)?)?;

    match args.output.as_deref() {
        Some(path) if !is_stdio(path) => {
            let file = File::create(path).map_err(|source| AppError::File {
                path: path.to_path_buf(),
                source,
            })?;
            write_statements(file, layout, &outcome.rows)?;
            info!(path = %path.display(), rows = outcome.rows.len(), "wrote output table");
        }
        _ => write_statements(io::stdout().lock(), layout, &outcome.rows)?,
    }

    write_preview(io::stderr().lock(), args.preview, layout, &outcome)?;
    Ok(())
}

/// Read posts from `input` and run the transform configured by `args`.
///
/// The keyword dictionary is only loaded when classification is on.
pub fn transform_input<R: Read>(
    args: &ProcessArgs,
    input: R,
) -> Result<(OutputColumns, TransformOutcome), AppError> {
    let options = args.transform_options();
    let dictionary = if options.classify {
        let (dictionary, fallback) = args.resolve_dictionary()?;
        if let Some(reason) = &fallback {
            warn!(%reason, "keyword dictionary rejected, using the default dictionary");
        }
        dictionary
    } else {
        if args.has_dictionary() {
            warn!("keyword dictionary supplied without --classify; it will be ignored");
        }
        KeywordDictionary::default()
    };

    let table = read_posts(input, &args.column_selection())?;
    info!(
        rows = table.records.len(),
        columns = table.columns.len(),
        "loaded input table"
    );

    let outcome = TableTransformer::new(&dictionary, options).run(&table.records);
    if options.classify {
        for (category, count) in &outcome.report.category_counts {
            info!(%category, count, "category total");
        }
    }
    Ok((OutputColumns::from_options(&options), outcome))
}

/// Echo the first `limit` rows as CSV. Writes nothing when `limit` is 0.
pub fn write_preview<W: Write>(
    mut sink: W,
    limit: usize,
    layout: OutputColumns,
    outcome: &TransformOutcome,
) -> Result<(), AppError> {
    if limit == 0 {
        return Ok(());
    }
    let shown = limit.min(outcome.rows.len());
    writeln!(sink, "Preview ({shown} of {} rows):", outcome.rows.len())?;
    write_statements(&mut sink, layout, &outcome.rows[..shown])?;
    Ok(())
}

/// Write the header names of `input`, one per line.
pub fn write_columns<R: Read, W: Write>(input: R, mut sink: W) -> Result<(), AppError> {
    for name in read_columns(input)? {
        writeln!(sink, "{name}")?;
    }
    Ok(())
}

/// Write the built-in dictionary as pretty JSON.
pub fn write_default_keywords<W: Write>(mut sink: W) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&KeywordDictionary::default())?;
    writeln!(sink, "{json}")?;
    Ok(())
}

async fn serve(args: &ServeArgs) -> Result<(), AppError> {
    let (dictionary, fallback) = args.resolve_dictionary()?;
    if let Some(reason) = &fallback {
        warn!(%reason, "default keyword dictionary rejected, serving the built-in one");
    }
    let state = Arc::new(AppState::new(dictionary, args.column_selection()));
    api::server::serve(api::router(state), args.bind).await
}

fn open_input(path: &Path) -> Result<Box<dyn Read>, AppError> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| AppError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}
