use dioxus::prelude::*;
use shared_types::ComplianceFlag;

use crate::components::{Badge, SectionCard, Tone};

/// Regulatory concerns raised against a contract.
#[component]
pub fn ComplianceFlags(flags: Vec<ComplianceFlag>) -> Element {
    rsx! {
        SectionCard { class: "compliance-flags", title: "Compliance Flags",
            if flags.is_empty() {
                p { class: "analysis-muted", "No compliance issues detected." }
            } else {
                ul { class: "analysis-list",
                    for (idx, flag) in flags.iter().enumerate() {
                        li { key: "{idx}", class: "analysis-item",
                            div { class: "analysis-item-head",
                                span { class: "analysis-item-title", "{flag.regulation}" }
                                Badge {
                                    tone: Tone::from(flag.severity),
                                    "{flag.severity.display_name()}"
                                }
                            }
                            p { class: "analysis-item-body", "{flag.description}" }
                            if let Some(recommendation) = &flag.recommendation {
                                p { class: "analysis-muted", "Recommendation: {recommendation}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
