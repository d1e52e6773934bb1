use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::store::{AppState, DocumentStore};
use shared_types::FeatureFlags;
use tower::ServiceExt;

#[allow(dead_code)]
/// Build the full application router over an empty in-memory store.
/// The OpenAPI route is mounted; OTLP spans are not.
pub fn test_app() -> Router {
    test_app_with_store(DocumentStore::new())
}

#[allow(dead_code)]
pub fn test_app_with_store(store: DocumentStore) -> Router {
    let state = AppState {
        store,
        flags: FeatureFlags {
            telemetry: false,
            openapi: true,
        },
    };
    server::app_router(state)
}

#[allow(dead_code)]
/// JSON body for registering a document.
pub fn create_body(document_id: &str, document_type: &str) -> String {
    serde_json::json!({
        "document_id": document_id,
        "file_name": format!("{document_id}.pdf"),
        "client_name": "Acme Corp",
        "client_email": "legal@acme.com",
        "document_type": document_type,
    })
    .to_string()
}

#[allow(dead_code)]
/// JSON body for a full set of analysis results.
pub fn results_body() -> String {
    serde_json::json!({
        "executive_summary": "Moderate exposure in the indemnity terms.",
        "risk_score": 55.0,
        "confidence_score": 80.0,
        "compliance_flags": [
            {
                "regulation": "GDPR",
                "description": "Personal data transferred without safeguards",
                "severity": "high",
                "recommendation": "Add standard contractual clauses"
            }
        ],
        "extracted_clauses": [
            {
                "clause_type": "Indemnification",
                "text": "Supplier shall indemnify Customer against all claims.",
                "risk_level": "high"
            }
        ],
        "precedent_cases": [
            {
                "case_name": "Smith v. Jones",
                "citation": "123 F.3d 456",
                "relevance": 82.0,
                "summary": "Unlimited indemnity upheld."
            }
        ],
        "recommended_actions": ["Cap indemnity at fees paid", "Review data transfers"]
    })
    .to_string()
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    send(app, json_request("POST", uri, json)).await
}

#[allow(dead_code)]
/// Helper to make a PUT request with JSON body.
pub async fn put_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    send(app, json_request("PUT", uri, json)).await
}

fn json_request(method: &str, uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
