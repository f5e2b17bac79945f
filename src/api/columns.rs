use axum::Json;
use tracing::info;

use super::ApiError;
use crate::table::read_columns;

/// Handler for POST /v1/columns: header names of the CSV body.
pub async fn columns_handler(body: String) -> Result<Json<Vec<String>>, ApiError> {
    let columns = read_columns(body.as_bytes())?;
    info!(columns = columns.len(), "listed input columns");
    Ok(Json(columns))
}
