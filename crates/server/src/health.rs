use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

use crate::store::DocumentStore;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Liveness plus a snapshot of store occupancy.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Registered documents.
    pub documents: usize,
    /// Documents whose analysis results have arrived.
    pub analyzed: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthResponse {
    fn from_store(store: &DocumentStore) -> Self {
        let (documents, analyzed) = store.counts();
        Self {
            status: "ok".to_string(),
            documents,
            analyzed,
            uptime_seconds: START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(store): State<DocumentStore>) -> Json<HealthResponse> {
    Json(HealthResponse::from_store(&store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AnalysisResults, DocumentType, LegalDocument};

    fn doc(id: &str) -> LegalDocument {
        LegalDocument {
            document_id: id.into(),
            file_name: None,
            client_name: "Acme".into(),
            client_email: "a@acme.com".into(),
            document_type: DocumentType::CaseLaw,
            results: None,
        }
    }

    #[test]
    fn counts_analyzed_documents_separately() {
        let store = DocumentStore::from_documents([doc("a"), doc("b")]).unwrap();
        store
            .attach_results("a", AnalysisResults::default())
            .unwrap();

        let health = HealthResponse::from_store(&store);
        assert_eq!(health.status, "ok");
        assert_eq!(health.documents, 2);
        assert_eq!(health.analyzed, 1);
    }
}
