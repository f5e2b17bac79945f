use indexmap::IndexMap;
use tracing::{debug, info};

use crate::classification::{KeywordDictionary, KeywordMatcher, UNCATEGORIZED};
use crate::domain::{ContextValue, MissingContext, PostRecord, StatementRow};
use crate::text::segment;

/// Per-call processing switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Split hashtags into their own statements
    pub include_hashtags: bool,
    /// Attach a keyword category to every statement
    pub classify: bool,
    /// Copy the raw caption into every output row
    pub include_context: bool,
    pub missing_context: MissingContext,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            include_hashtags: true,
            classify: false,
            include_context: false,
            missing_context: MissingContext::Literal,
        }
    }
}

/// Counters describing one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows that produced no statements
    pub dropped_rows: usize,
    pub missing_context_rows: usize,
    /// Statements per category, dictionary order then `Uncategorized`.
    /// Empty when classification is off.
    pub category_counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub rows: Vec<StatementRow>,
    pub report: TransformReport,
}

/// Stateless single-pass transform over a table of posts.
///
/// The dictionary is compiled once at construction and only read afterwards,
/// so one transformer can serve any number of runs.
#[derive(Debug, Clone)]
pub struct TableTransformer {
    options: TransformOptions,
    matcher: Option<KeywordMatcher>,
    categories: Vec<String>,
}

impl TableTransformer {
    #[must_use]
    pub fn new(dictionary: &KeywordDictionary, options: TransformOptions) -> Self {
        let matcher = options.classify.then(|| KeywordMatcher::new(dictionary));
        let categories = if options.classify {
            dictionary.category_names().map(String::from).collect()
        } else {
            Vec::new()
        };
        Self {
            options,
            matcher,
            categories,
        }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    #[must_use]
    pub fn run(&self, rows: &[PostRecord]) -> TransformOutcome {
        let mut report = TransformReport {
            input_rows: rows.len(),
            category_counts: self.empty_category_counts(),
            ..TransformReport::default()
        };
        let mut output = Vec::with_capacity(rows.len());

        for row in rows {
            if row.context.is_missing() {
                report.missing_context_rows += 1;
            }
            let before = output.len();
            self.transform_row(row, &mut output, &mut report);
            if output.len() == before {
                debug!(id = %row.id, "row produced no statements");
                report.dropped_rows += 1;
            }
        }

        report.output_rows = output.len();
        info!(
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            dropped_rows = report.dropped_rows,
            missing_context_rows = report.missing_context_rows,
            classify = self.options.classify,
            "transform completed"
        );

        TransformOutcome {
            rows: output,
            report,
        }
    }

    fn transform_row(
        &self,
        row: &PostRecord,
        output: &mut Vec<StatementRow>,
        report: &mut TransformReport,
    ) {
        let text = row.context.to_text(self.options.missing_context);
        let context = self.options.include_context.then(|| raw_context(&row.context));

        for fragment in segment(&text, self.options.include_hashtags) {
            let category = self.matcher.as_ref().map(|matcher| {
                let category = matcher.classify(&fragment.text).to_string();
                *report.category_counts.entry(category.clone()).or_insert(0) += 1;
                category
            });
            output.push(StatementRow {
                id: row.id.clone(),
                context: context.clone(),
                sentence_id: fragment.sentence_id,
                statement: fragment.text,
                category,
            });
        }
    }

    fn empty_category_counts(&self) -> IndexMap<String, usize> {
        if self.matcher.is_none() {
            return IndexMap::new();
        }
        self.categories
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(UNCATEGORIZED))
            .map(|name| (name.to_string(), 0))
            .collect()
    }
}

/// Context as written to the output table: missing cells stay blank.
fn raw_context(context: &ContextValue) -> String {
    match context {
        ContextValue::Text(text) => text.clone(),
        ContextValue::Missing => String::new(),
    }
}

/// Flatten `rows` into one output row per statement.
#[must_use]
pub fn transform(
    rows: &[PostRecord],
    dictionary: &KeywordDictionary,
    include_hashtags: bool,
    classify: bool,
) -> Vec<StatementRow> {
    let options = TransformOptions {
        include_hashtags,
        classify,
        ..TransformOptions::default()
    };
    TableTransformer::new(dictionary, options).run(rows).rows
}
