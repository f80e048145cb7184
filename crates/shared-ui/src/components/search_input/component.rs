use dioxus::prelude::*;

/// Search field with a leading icon slot and a clear button.
///
/// `on_change` fires with the full text on every keystroke, and with an
/// empty string when cleared. The clear button only renders while there
/// is text to clear.
#[component]
pub fn SearchInput(
    value: String,
    on_change: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = "Search".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "search-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_text = !value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-input-row", role: "search",
            span { class: "search-input-icon", "aria-hidden": "true", {children} }
            input {
                r#type: "search",
                value: value,
                placeholder: placeholder,
                aria_label: label,
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
                ..merged,
            }
            if has_text {
                button {
                    class: "search-input-clear",
                    r#type: "button",
                    "aria-label": "Clear search",
                    onclick: move |_| on_change.call(String::new()),
                    "\u{00D7}"
                }
            }
        }
    }
}
