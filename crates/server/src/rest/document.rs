use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use shared_types::{
    AnalysisResults, AppError, CreateDocumentRequest, DocumentSummary, LegalDocument,
};
use crate::error_convert::{json_rejection_to_app_error, ValidateRequest};
use crate::store::DocumentStore;

/// GET /api/v1/documents
///
/// List all documents, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    responses(
        (status = 200, description = "All documents", body = Vec<DocumentSummary>)
    ),
    tag = "documents"
)]
pub async fn list_documents(State(store): State<DocumentStore>) -> Json<Vec<DocumentSummary>> {
    Json(store.list())
}

/// POST /api/v1/documents
///
/// Register a document. Results are attached later by the analysis pipeline.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document registered", body = LegalDocument),
        (status = 400, description = "Malformed request body", body = AppError),
        (status = 409, description = "Document id already in use", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "documents"
)]
pub async fn create_document(
    State(store): State<DocumentStore>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LegalDocument>), AppError> {
    let Json(body) = payload.map_err(json_rejection_to_app_error)?;
    body.validate_request()?;

    let document = store.insert(LegalDocument::from(body))?;
    tracing::info!(
        document_id = %document.document_id,
        document_type = %document.document_type,
        "document registered"
    );
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/documents/{id}
#[utoipa::path(
    get,
    path = "/api/v1/documents/{id}",
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document found", body = LegalDocument),
        (status = 404, description = "Document not found", body = AppError)
    ),
    tag = "documents"
)]
pub async fn get_document(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
) -> Result<Json<LegalDocument>, AppError> {
    store
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Document '{id}' not found")))
}

/// PUT /api/v1/documents/{id}/results
///
/// Attach the analysis pipeline's output. Each document accepts results once.
#[utoipa::path(
    put,
    path = "/api/v1/documents/{id}/results",
    params(("id" = String, Path, description = "Document ID")),
    request_body = AnalysisResults,
    responses(
        (status = 200, description = "Results attached", body = LegalDocument),
        (status = 400, description = "Malformed request body", body = AppError),
        (status = 404, description = "Document not found", body = AppError),
        (status = 409, description = "Results already attached", body = AppError)
    ),
    tag = "documents"
)]
pub async fn attach_results(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
    payload: Result<Json<AnalysisResults>, JsonRejection>,
) -> Result<Json<LegalDocument>, AppError> {
    let Json(results) = payload.map_err(json_rejection_to_app_error)?;

    let document = store.attach_results(&id, results)?;
    tracing::info!(document_id = %id, "analysis results attached");
    Ok(Json(document))
}
