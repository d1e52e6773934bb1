pub mod config;
pub mod error_convert;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod rest;
pub mod store;
pub mod telemetry;

use axum::{routing::get, Router};

use crate::store::AppState;

/// Assemble the full application router: REST API, HTML pages and health.
///
/// The OpenAPI document is mounted only when the `openapi` flag is set, and
/// request spans only when the `telemetry` flag is set.
pub fn app_router(state: AppState) -> Router {
    let flags = state.flags.clone();

    let mut router = rest::api_router()
        .route("/documents/{id}", get(pages::dashboard_page))
        .route("/health", get(health::health_check));

    if flags.openapi {
        router = router.route("/api-docs/openapi.json", get(openapi::openapi_json));
    }

    let mut router = router
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    if flags.telemetry {
        router = router.layer(telemetry::OtelTraceLayer);
    }

    router
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ))
}
