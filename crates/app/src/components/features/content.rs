use dioxus::prelude::*;
use shared_types::Feature;

use crate::format_helpers::slide_style;
use crate::icons::GlyphIcon;

/// Tab panel for one feature, listing its detail bullets.
#[component]
pub fn FeatureDetailSection(feature: &'static Feature, is_active: bool) -> Element {
    rsx! {
        div {
            class: "feature-detail-section",
            "data-feature-section": "{feature.order}",
            id: feature.section_id(),
            role: "tabpanel",
            "aria-labelledby": feature.tab_id(),
            "aria-hidden": if is_active { "false" } else { "true" },
            div { class: "feature-detail-card", "data-accent": feature.accent.as_str(),
                div { class: "feature-detail-heading",
                    div { class: "feature-detail-icon", "aria-hidden": "true",
                        GlyphIcon { glyph: feature.glyph, size: 32 }
                    }
                    h3 { class: "feature-detail-title", "{feature.title}" }
                }
                p { class: "feature-detail-description", "{feature.description}" }
                ul { class: "feature-detail-list",
                    for (i, detail) in feature.details.iter().enumerate() {
                        li { key: "{feature.title}-{i}", class: "feature-detail-item",
                            span { class: "feature-detail-bullet", "aria-hidden": "true" }
                            p { "{detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// Every feature's panel, stacked; only the active one is exposed to
/// assistive technology.
#[component]
pub fn FeatureContent(features: &'static [Feature], active_index: usize) -> Element {
    rsx! {
        div { class: "feature-content",
            for feature in features.iter() {
                FeatureDetailSection {
                    key: "{feature.title}",
                    feature,
                    is_active: feature.order == active_index,
                }
            }
        }
    }
}

/// Headline card for the active feature during the grid-to-detail transition.
#[component]
pub fn TransitionContent(
    features: &'static [Feature],
    active_index: usize,
    #[props(default = 1.0)] opacity: f64,
    #[props(default = 0.0)] offset_x: f64,
) -> Element {
    let Some(feature) = features.get(active_index) else {
        return rsx! {};
    };

    rsx! {
        div { class: "transition-content", style: slide_style(opacity, offset_x),
            div { class: "transition-content-card", "data-accent": feature.accent.as_str(),
                div { class: "feature-detail-heading",
                    div { class: "feature-detail-icon",
                        GlyphIcon { glyph: feature.glyph, size: 32 }
                    }
                    h3 { class: "feature-detail-title", "{feature.title}" }
                }
                p { class: "transition-content-hint", "Select a feature to explore it in detail" }
            }
        }
    }
}
