use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{
    plan_dashboard, DashboardHeader, DashboardSection, DashboardView, LegalDocument,
    EMPTY_STATE_MESSAGE,
};

use super::{ComplianceFlags, ExtractedClauses, PrecedentCases, RecommendedActions, RiskScoreCard};
use crate::components::{Card, SectionCard};

/// Analysis results for one document.
///
/// Layout decisions come from [`plan_dashboard`]; this component only maps
/// each planned section to its renderer.
#[component]
pub fn AnalysisDashboard(document: LegalDocument) -> Element {
    match plan_dashboard(&document) {
        DashboardView::Empty => rsx! {
            Card { class: "analysis-empty",
                div { class: "card-content",
                    p { class: "analysis-muted", "{EMPTY_STATE_MESSAGE}" }
                }
            }
        },
        DashboardView::Report(report) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { class: "analysis-dashboard",
                HeaderCard { header: report.header }
                for (idx, section) in report.sections.into_iter().enumerate() {
                    SectionView { key: "{idx}", section }
                }
            }
        },
    }
}

#[component]
fn HeaderCard(header: DashboardHeader) -> Element {
    rsx! {
        Card { class: "analysis-header",
            header { class: "card-header",
                h2 { class: "card-title",
                    Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                    "{header.title}"
                }
                p { class: "analysis-subtitle", "{header.subtitle}" }
            }
        }
    }
}

#[component]
fn SectionView(section: DashboardSection) -> Element {
    match section {
        DashboardSection::Summary { title, body } => rsx! {
            SectionCard { class: "analysis-summary", title: title.to_string(),
                p { class: "analysis-summary-body", "{body}" }
            }
        },
        DashboardSection::Score {
            risk_score,
            confidence_score,
            document_type,
        } => rsx! {
            RiskScoreCard { risk_score, confidence_score, document_type }
        },
        DashboardSection::ComplianceFlags(flags) => rsx! {
            ComplianceFlags { flags }
        },
        DashboardSection::ExtractedClauses(clauses) => rsx! {
            ExtractedClauses { clauses }
        },
        DashboardSection::PrecedentCases(cases) => rsx! {
            PrecedentCases { cases }
        },
        DashboardSection::RecommendedActions(actions) => rsx! {
            RecommendedActions { actions }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::render;
    use pretty_assertions::assert_eq;
    use shared_types::{AnalysisResults, DocumentType};

    fn nda(document_type: &str, with_results: bool) -> LegalDocument {
        LegalDocument {
            document_id: "doc-1".into(),
            file_name: Some("NDA.pdf".into()),
            client_name: "Acme".into(),
            client_email: "a@acme.com".into(),
            document_type: DocumentType::from(document_type),
            results: with_results.then(|| AnalysisResults {
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

    fn dashboard(document: LegalDocument) -> String {
        render(AnalysisDashboard, AnalysisDashboardProps { document })
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not rendered"))
    }

    #[test]
    fn contract_renders_every_section_in_order() {
        let html = dashboard(nda("contract", true));

        assert!(html.contains("NDA.pdf"));
        assert!(html.contains("Acme • a@acme.com • Contract"));
        assert!(html.contains("Executive Summary"));
        assert!(html.contains("Low risk."));

        let order = [
            position(&html, "Risk Score"),
            position(&html, "Compliance Flags"),
            position(&html, "Extracted Clauses"),
            position(&html, "Precedent Cases"),
            position(&html, "Recommended Actions"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(html[order[4]..].contains("Sign"));
    }

    #[test]
    fn missing_results_render_only_empty_state() {
        let html = dashboard(nda("contract", false));

        assert!(html.contains(EMPTY_STATE_MESSAGE));
        assert!(!html.contains("NDA.pdf"));
        assert!(!html.contains("Executive Summary"));
        assert!(!html.contains("Recommended Actions"));
    }

    #[test]
    fn case_law_omits_contract_sections() {
        let html = dashboard(nda("case_law", true));

        assert!(html.contains("Research Summary"));
        assert!(html.contains("a@acme.com • Case Law"));
        assert!(html.contains("Applicability Score"));
        assert!(html.contains("Recommended Actions"));
        assert!(!html.contains("Compliance Flags"));
        assert!(!html.contains("Extracted Clauses"));
        assert!(!html.contains("Precedent Cases"));
    }

    #[test]
    fn unrecognized_type_follows_default_branches() {
        let html = dashboard(nda("memo", true));

        assert!(html.contains("Executive Summary"));
        assert!(html.contains("a@acme.com • Case Law"));
        assert!(!html.contains("Compliance Flags"));
        assert!(html.contains("Recommended Actions"));
    }

    #[test]
    fn header_falls_back_to_document_id() {
        let mut doc = nda("contract", true);
        doc.file_name = None;
        assert!(dashboard(doc).contains("doc-1"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let doc = nda("contract", true);
        assert_eq!(dashboard(doc.clone()), dashboard(doc));
    }
}
