use dioxus::prelude::*;
use shared_types::{clamp_percent, format_score, PrecedentCase};

use crate::components::SectionCard;

/// Prior decisions relevant to a contract, most relevant first as supplied.
#[component]
pub fn PrecedentCases(cases: Vec<PrecedentCase>) -> Element {
    rsx! {
        SectionCard { class: "precedent-cases", title: "Precedent Cases",
            if cases.is_empty() {
                p { class: "analysis-muted", "No relevant precedents found." }
            } else {
                ul { class: "analysis-list",
                    for (idx, case) in cases.iter().enumerate() {
                        li { key: "{idx}", class: "analysis-item",
                            div { class: "analysis-item-head",
                                span { class: "analysis-item-title", "{case.case_name}" }
                                span { class: "precedent-relevance",
                                    "{format_score(clamp_percent(case.relevance))}% relevant"
                                }
                            }
                            cite { class: "precedent-citation", "{case.citation}" }
                            if !case.summary.is_empty() {
                                p { class: "analysis-item-body", "{case.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
