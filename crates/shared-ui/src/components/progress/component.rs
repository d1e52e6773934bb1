use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Horizontal bar for 0-100 scores. Wraps the primitives progress root.
#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// A labelled score bar: `label` on the left, `value_text` on the right,
/// and a progress bar filled to `percent`.
#[component]
pub fn ScoreBar(label: String, value_text: String, percent: f64) -> Element {
    rsx! {
        div { class: "score-bar",
            div { class: "score-bar-labels",
                span { class: "score-bar-label", "{label}" }
                span { class: "score-bar-value", "{value_text}" }
            }
            Progress {
                value: Some(percent),
                ProgressIndicator {}
            }
        }
    }
}
