//! Server-rendered HTML pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;
use shared_types::{DocumentType, LegalDocument};
use shared_ui::{AnalysisDashboard, STYLESHEET};

use crate::store::DocumentStore;

/// Render a component tree to an HTML string.
fn render_to_string<P: Properties + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
}

#[component]
fn PageShell(page_title: String, children: Element) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{page_title}" }
                style { dangerous_inner_html: STYLESHEET }
            }
            body {
                main { class: "container", {children} }
            }
        }
    }
}

#[component]
fn DashboardPage(document: LegalDocument) -> Element {
    let page_title = format!("{} | Analysis", document.display_title());

    rsx! {
        PageShell { page_title,
            AnalysisDashboard { document }
        }
    }
}

#[component]
fn NotFoundPage(document_id: String) -> Element {
    rsx! {
        PageShell { page_title: "Document Not Found".to_string(),
            div { class: "empty-state",
                h2 { "Document Not Found" }
                p { "No document with id \"{document_id}\" exists." }
            }
        }
    }
}

/// Full HTML page with the analysis dashboard for one document.
pub fn render_dashboard_page(document: &LegalDocument) -> String {
    if let DocumentType::Unrecognized(raw) = &document.document_type {
        tracing::warn!(
            document_id = %document.document_id,
            document_type = %raw,
            "rendering document with unrecognized type using default layout"
        );
    }
    render_to_string(
        DashboardPage,
        DashboardPageProps {
            document: document.clone(),
        },
    )
}

pub fn render_not_found_page(document_id: &str) -> String {
    render_to_string(
        NotFoundPage,
        NotFoundPageProps {
            document_id: document_id.to_string(),
        },
    )
}

/// GET /documents/{id}
pub async fn dashboard_page(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
) -> Response {
    match store.get(&id) {
        Some(document) => Html(render_dashboard_page(&document)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render_not_found_page(&id))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AnalysisResults;

    fn document() -> LegalDocument {
        LegalDocument {
            document_id: "doc-1".into(),
            file_name: Some("NDA.pdf".into()),
            client_name: "Acme".into(),
            client_email: "a@acme.com".into(),
            document_type: DocumentType::Contract,
            results: Some(AnalysisResults {
                executive_summary: "Low risk.".into(),
                risk_score: 10.0,
                confidence_score: 90.0,
                compliance_flags: vec![],
                extracted_clauses: vec![],
                precedent_cases: vec![],
                recommended_actions: vec!["Sign".into()],
            }),
        }
    }

    #[test]
    fn page_wraps_dashboard_in_document() {
        let html = render_dashboard_page(&document());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>NDA.pdf | Analysis</title>"));
        assert!(html.contains("Executive Summary"));
        assert!(html.contains(".analysis-dashboard"));
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = document();
        doc.file_name = Some("<script>alert(1)</script>".into());
        let html = render_dashboard_page(&doc);
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn not_found_page_names_the_id() {
        let html = render_not_found_page("missing-7");
        assert!(html.contains("Document Not Found"));
        assert!(html.contains("missing-7"));
    }
}
