use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::info;

use super::{ApiError, AppState, KEYWORD_WARNING_HEADER};
use crate::classification::{DictionaryError, KeywordDictionary};
use crate::domain::MissingContext;
use crate::pipeline::{OutputColumns, TableTransformer, TransformOptions};
use crate::table::{
    ATTACHMENT_DISPOSITION, CSV_CONTENT_TYPE, ColumnSelection, read_posts, statements_to_csv,
};

/// Body of POST /v1/process. Omitted fields take the server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Input table as CSV text with a header row
    pub csv: String,
    pub id_column: Option<String>,
    pub context_column: Option<String>,
    pub include_hashtags: Option<bool>,
    pub classify: Option<bool>,
    pub include_context: Option<bool>,
    pub missing_context: Option<MissingContext>,
    /// Keyword dictionary as a JSON object, or as a string holding JSON text
    pub keywords: Option<Value>,
}

impl ProcessRequest {
    fn column_selection(&self, defaults: &ColumnSelection) -> ColumnSelection {
        ColumnSelection::new(
            self.id_column
                .clone()
                .unwrap_or_else(|| defaults.id_column.clone()),
            self.context_column
                .clone()
                .unwrap_or_else(|| defaults.context_column.clone()),
        )
    }

    fn transform_options(&self) -> TransformOptions {
        let defaults = TransformOptions::default();
        TransformOptions {
            include_hashtags: self.include_hashtags.unwrap_or(defaults.include_hashtags),
            classify: self.classify.unwrap_or(defaults.classify),
            include_context: self.include_context.unwrap_or(defaults.include_context),
            missing_context: self.missing_context.unwrap_or(defaults.missing_context),
        }
    }

    /// Dictionary for this request. `keywords` is only read when classifying.
    fn dictionary<'a>(
        &self,
        classify: bool,
        default: &'a KeywordDictionary,
    ) -> (Cow<'a, KeywordDictionary>, Option<DictionaryError>) {
        match &self.keywords {
            Some(value) if classify => {
                let (dictionary, fallback) = KeywordDictionary::resolve_value(value);
                (Cow::Owned(dictionary), fallback)
            }
            _ => (Cow::Borrowed(default), None),
        }
    }
}

/// Handler for POST /v1/process: returns the statement table as a CSV attachment.
pub async fn process_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessRequest>,
) -> Result<Response, ApiError> {
    let selection = request.column_selection(&state.default_columns);
    let options = request.transform_options();
    let (dictionary, fallback) = request.dictionary(options.classify, &state.default_dictionary);

    let table = read_posts(request.csv.as_bytes(), &selection)?;
    let outcome = TableTransformer::new(&dictionary, options).run(&table.records);
    let body = statements_to_csv(OutputColumns::from_options(&options), &outcome.rows)?;

    info!(
        input_rows = outcome.report.input_rows,
        output_rows = outcome.report.output_rows,
        dictionary_fallback = fallback.is_some(),
        "processed table"
    );

    let mut response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static(ATTACHMENT_DISPOSITION),
            ),
        ],
        body,
    )
        .into_response();

    if let Some(error) = fallback {
        response
            .headers_mut()
            .insert(KEYWORD_WARNING_HEADER, header_value(&error.to_string()));
    }

    Ok(response)
}

/// Header-safe rendering of a free-text message.
fn header_value(message: &str) -> HeaderValue {
    let sanitized: String = message
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '?' })
        .collect();
    HeaderValue::from_str(&sanitized).unwrap_or_else(|_| HeaderValue::from_static("invalid"))
}
