use dioxus::prelude::*;
use shared_types::Feature;

use crate::icons::GlyphIcon;

/// Summary card for one feature. Cards fade in staggered by position.
#[component]
pub fn FeatureCard(feature: &'static Feature) -> Element {
    let delay = feature.order * 100;

    rsx! {
        div {
            class: "feature-card",
            "data-accent": feature.accent.as_str(),
            style: "animation-delay: {delay}ms;",
            div { class: "feature-card-icon",
                GlyphIcon { glyph: feature.glyph, size: 24 }
            }
            h3 { class: "feature-card-title", "{feature.title}" }
            p { class: "feature-card-description", "{feature.description}" }
        }
    }
}

/// Read-only grid of every feature.
#[component]
pub fn FeatureGrid(features: &'static [Feature], #[props(default = 1.0)] opacity: f64) -> Element {
    rsx! {
        div { class: "feature-grid-layer", style: "opacity: {opacity};",
            div { class: "feature-grid",
                for feature in features.iter() {
                    FeatureCard { key: "{feature.title}", feature }
                }
            }
        }
    }
}
