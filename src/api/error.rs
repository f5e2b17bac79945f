use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::table::TableError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Table(#[from] TableError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Table(TableError::MissingColumns { missing, available }) => {
                warn!(?missing, "request names columns absent from the table");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": message,
                        "missing": missing,
                        "available": available,
                    })),
                )
                    .into_response()
            }
            ApiError::Table(error) => {
                warn!(error = %error, "unreadable input table");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
