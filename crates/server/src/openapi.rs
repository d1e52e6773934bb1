use axum::Json;
use shared_types::{
    AnalysisResults, AppError, AppErrorKind, ComplianceFlag, CreateDocumentRequest,
    DocumentSummary, ExtractedClause, LegalDocument, PrecedentCase,
};
use utoipa::OpenApi;

use crate::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Legal Analysis Dashboard API",
        description = "Documents, analysis results and rendered dashboards."
    ),
    paths(
        crate::health::health_check,
        crate::rest::document::list_documents,
        crate::rest::document::create_document,
        crate::rest::document::get_document,
        crate::rest::document::attach_results,
    ),
    components(schemas(
        AnalysisResults,
        AppError,
        AppErrorKind,
        ComplianceFlag,
        CreateDocumentRequest,
        DocumentSummary,
        ExtractedClause,
        HealthResponse,
        LegalDocument,
        PrecedentCase,
    )),
    tags(
        (name = "documents", description = "Document registration and analysis results"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
