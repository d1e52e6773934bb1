pub mod document;

use axum::{routing::{get, put}, Router};
use crate::store::AppState;

/// Build the JSON REST router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/documents",
            get(document::list_documents).post(document::create_document),
        )
        .route("/api/v1/documents/{id}", get(document::get_document))
        .route("/api/v1/documents/{id}/results", put(document::attach_results))
}
