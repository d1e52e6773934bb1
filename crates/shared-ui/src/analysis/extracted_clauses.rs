use dioxus::prelude::*;
use shared_types::ExtractedClause;

use crate::components::{Badge, SectionCard, Tone};

/// Key contract clauses with their assessed risk level, in extraction order.
#[component]
pub fn ExtractedClauses(clauses: Vec<ExtractedClause>) -> Element {
    rsx! {
        SectionCard { class: "extracted-clauses", title: "Extracted Clauses",
            if clauses.is_empty() {
                p { class: "analysis-muted", "No clauses extracted." }
            } else {
                div { class: "analysis-list",
                    for (idx, clause) in clauses.iter().enumerate() {
                        article { key: "{idx}", class: "analysis-item",
                            div { class: "analysis-item-head",
                                span { class: "analysis-item-title", "{clause.clause_type}" }
                                Badge {
                                    tone: Tone::from(clause.risk_level),
                                    "{clause.risk_level.display_name()}"
                                }
                            }
                            blockquote { class: "clause-text", "{clause.text}" }
                            if let Some(notes) = &clause.notes {
                                p { class: "analysis-muted", "{notes}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::render;
    use shared_types::RiskLevel;

    #[test]
    fn empty_clauses_show_notice() {
        let html = render(ExtractedClauses, ExtractedClausesProps { clauses: vec![] });
        assert!(html.contains("Extracted Clauses"));
        assert!(html.contains("No clauses extracted."));
    }

    #[test]
    fn clauses_render_in_order() {
        let clauses = vec![
            ExtractedClause {
                clause_type: "Termination".into(),
                text: "Either party may terminate on 30 days notice.".into(),
                risk_level: RiskLevel::Low,
                notes: None,
            },
            ExtractedClause {
                clause_type: "Indemnification".into(),
                text: "Supplier indemnifies without cap.".into(),
                risk_level: RiskLevel::High,
                notes: Some("Uncapped exposure".into()),
            },
        ];
        let html = render(ExtractedClauses, ExtractedClausesProps { clauses });

        let termination = html.find("Termination").unwrap();
        let indemnification = html.find("Indemnification").unwrap();
        assert!(termination < indemnification);
        assert!(html.contains("High Risk"));
        assert!(html.contains("Uncapped exposure"));
    }
}
