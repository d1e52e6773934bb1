use dioxus::prelude::*;

use crate::components::SectionCard;

/// Next steps suggested by the analysis. Shown for every document type.
#[component]
pub fn RecommendedActions(actions: Vec<String>) -> Element {
    rsx! {
        SectionCard { class: "recommended-actions", title: "Recommended Actions",
            if actions.is_empty() {
                p { class: "analysis-muted", "No recommended actions." }
            } else {
                ol { class: "action-list",
                    for (idx, action) in actions.iter().enumerate() {
                        li { key: "{idx}", class: "action-item", "{action}" }
                    }
                }
            }
        }
    }
}
