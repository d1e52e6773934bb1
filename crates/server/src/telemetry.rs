use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use shared_types::FeatureFlags;
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};
use tracing_subscriber::EnvFilter;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "legal-analysis";

/// Keep the TracerProvider alive for the process lifetime.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Install the `tracing` fmt subscriber. Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install the `tracing` subscriber and, when enabled, the OTLP trace exporter.
///
/// Log filtering follows `RUST_LOG` (default `info`). OTLP export needs both
/// the `telemetry` feature flag and `OTEL_EXPORTER_OTLP_ENDPOINT`:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT` — collector gRPC address
///   - `OTEL_SERVICE_NAME` — service name tag (default: `legal-analysis`)
///   - `DEPLOY_ENV` — deployment environment tag (default: `development`)
///
/// Must run inside a Tokio runtime; the gRPC exporter spawns onto it.
pub fn init_telemetry(flags: &FeatureFlags) {
    init_logging();

    if !flags.telemetry {
        return;
    }

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) if !ep.is_empty() => ep,
        _ => {
            tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "failed to create OTLP exporter, traces disabled");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider.clone());
    let _ = TRACER_PROVIDER.set(provider);

    tracing::info!(%endpoint, version = APP_VERSION, "OTLP trace export enabled");
}

/// Flush and stop the OTLP exporter, if one was started.
pub fn shutdown_telemetry() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "tracer provider shutdown failed");
        }
    }
}

/// Collapse the document id in a request path so spans group by route,
/// returning the id separately.
///
/// `/api/v1/documents/nda-17/results` becomes
/// `/api/v1/documents/{id}/results` with id `nda-17`.
fn route_template(path: &str) -> (String, Option<&str>) {
    let mut out = Vec::new();
    let mut document_id = None;
    let mut after_documents = false;
    for segment in path.split('/') {
        if after_documents && !segment.is_empty() && document_id.is_none() {
            document_id = Some(segment);
            out.push("{id}");
            after_documents = false;
            continue;
        }
        after_documents = segment == "documents";
        out.push(segment);
    }
    (out.join("/"), document_id)
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures method, route, document id, request ID and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path();
        let (route, document_id) = route_template(path);
        let document_id = document_id.map(str::to_string);

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.route", route.clone()),
            KeyValue::new("http.request_id", request_id),
        ];
        if let Some(id) = document_id {
            attributes.push(KeyValue::new("document.id", id));
        }

        let span = tracer
            .span_builder(format!("{} {}", &method, &route))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_template_collapses_document_ids() {
        assert_eq!(
            route_template("/api/v1/documents/nda-17"),
            ("/api/v1/documents/{id}".to_string(), Some("nda-17"))
        );
        assert_eq!(
            route_template("/api/v1/documents/nda-17/results"),
            ("/api/v1/documents/{id}/results".to_string(), Some("nda-17"))
        );
        assert_eq!(
            route_template("/documents/abc"),
            ("/documents/{id}".to_string(), Some("abc"))
        );
    }

    #[test]
    fn route_template_leaves_collection_paths() {
        assert_eq!(
            route_template("/api/v1/documents"),
            ("/api/v1/documents".to_string(), None)
        );
        assert_eq!(
            route_template("/api/v1/documents/"),
            ("/api/v1/documents/".to_string(), None)
        );
        assert_eq!(route_template("/health"), ("/health".to_string(), None));
    }
}
