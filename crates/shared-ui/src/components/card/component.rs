use dioxus::prelude::*;

/// Bordered container. The base `card` class is merged with any caller class.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// One titled dashboard section: heading, optional muted description, body.
#[component]
pub fn SectionCard(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        Card { ..attributes,
            header { class: "card-header",
                h3 { class: "card-title", "{title}" }
                if let Some(description) = description {
                    p { class: "card-description", "{description}" }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}
