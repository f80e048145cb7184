use dioxus::prelude::*;

#[component]
pub fn FeatureHeader() -> Element {
    rsx! {
        div { class: "feature-header",
            h2 { class: "feature-header-title", "Powerful Features" }
            p { class: "feature-header-subtitle",
                "Everything you need to manage incidents efficiently and keep your community safe."
            }
        }
    }
}
