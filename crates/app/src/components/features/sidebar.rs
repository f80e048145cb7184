use dioxus::prelude::*;
use shared_types::Feature;

use super::FeatureNavButton;
use crate::format_helpers::slide_style;

/// Sticky tab list with one [`FeatureNavButton`] per feature.
#[component]
pub fn FeatureSidebar(
    features: &'static [Feature],
    active_index: usize,
    on_feature_click: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "feature-sidebar",
            div { class: "feature-sidebar-sticky",
                nav {
                    class: "feature-nav-list",
                    role: "tablist",
                    "aria-label": "Feature sections",
                    for feature in features.iter() {
                        FeatureNavButton {
                            key: "{feature.title}",
                            feature,
                            active_index,
                            on_click: move |index| on_feature_click.call(index),
                        }
                    }
                }
            }
        }
    }
}

/// Tab list that fades and slides with the grid-to-detail transition.
#[component]
pub fn TransitionSidebar(
    features: &'static [Feature],
    active_index: usize,
    on_feature_click: EventHandler<usize>,
    #[props(default = 1.0)] opacity: f64,
    #[props(default = 0.0)] offset_x: f64,
) -> Element {
    rsx! {
        div {
            class: "feature-sidebar transition-sidebar",
            style: slide_style(opacity, offset_x),
            role: "tablist",
            "aria-label": "Feature navigation",
            div { class: "feature-nav-list",
                for feature in features.iter() {
                    FeatureNavButton {
                        key: "{feature.title}",
                        feature,
                        active_index,
                        on_click: move |index| on_feature_click.call(index),
                    }
                }
            }
        }
    }
}
