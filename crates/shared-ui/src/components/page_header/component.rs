use dioxus::prelude::*;

/// Page heading block: a centered `h1`, an optional subtitle and an
/// optional trailing slot for page-level controls.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "page-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            h1 { class: "page-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
            {children}
        }
    }
}
