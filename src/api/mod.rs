//! HTTP control plane around the transform.
pub mod columns;
pub mod error;
pub mod health;
pub mod keywords;
pub mod process;
pub mod server;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Header set on `/v1/process` responses when the supplied dictionary was replaced by the default.
pub const KEYWORD_WARNING_HEADER: &str = "x-keyword-dictionary-warning";

/// Build the HTTP router.
pub fn router(state: Arc<AppState>) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health::health_handler));

    let v1_router = Router::new()
        .route("/v1/keywords/default", get(keywords::default_keywords_handler))
        .route("/v1/columns", post(columns::columns_handler))
        .route("/v1/process", post(process::process_handler))
        .with_state(state);

    Router::new()
        .merge(v1_health_router)
        .merge(v1_router)
        .layer(TraceLayer::new_for_http())
}
