use dioxus::prelude::*;
use shared_types::{FeatureTabs, SiteConfig, FEATURES};
use shared_ui::{Button, ButtonVariant};

use crate::components::features::{
    FeatureContent, FeatureGrid, FeatureHeader, FeatureSidebar, TransitionContent,
    TransitionSidebar,
};

/// Opacity and horizontal offsets for the overview section.
///
/// The overview toggles between a grid of every feature and a focused
/// tab list with the active feature's headline card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub grid_opacity: f64,
    pub sidebar_opacity: f64,
    pub sidebar_x: f64,
    pub content_opacity: f64,
    pub content_x: f64,
}

const SLIDE_DISTANCE: f64 = 40.0;

pub fn transition_frame(focused: bool, reduced_motion: bool) -> TransitionFrame {
    let distance = if reduced_motion { 0.0 } else { SLIDE_DISTANCE };
    if focused {
        TransitionFrame {
            grid_opacity: 0.0,
            sidebar_opacity: 1.0,
            sidebar_x: 0.0,
            content_opacity: 1.0,
            content_x: 0.0,
        }
    } else {
        TransitionFrame {
            grid_opacity: 1.0,
            sidebar_opacity: 0.0,
            sidebar_x: -distance,
            content_opacity: 0.0,
            content_x: distance,
        }
    }
}

/// Landing page.
#[component]
pub fn Home() -> Element {
    let site: SiteConfig = use_context();
    let reduced_motion = site.sections.reduced_motion;
    let tabs = use_signal(|| FeatureTabs::new(FEATURES.len()));
    let mut focused = use_signal(|| false);

    let on_feature_click = move |index: usize| select_feature(tabs, index);

    let active_index = tabs.read().active();
    let frame = transition_frame(focused(), reduced_motion);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "feature-overview",
            FeatureHeader {}
            div { class: "feature-overview-toggle",
                Button {
                    variant: ButtonVariant::Outline,
                    pressed: focused(),
                    onclick: move |_| focused.set(!focused()),
                    if focused() { "Show all features" } else { "Explore one at a time" }
                }
            }
            div { class: "feature-overview-stage", "data-focused": if focused() { "true" } else { "false" },
                FeatureGrid { features: FEATURES, opacity: frame.grid_opacity }
                div { class: "feature-overview-focus",
                    TransitionSidebar {
                        features: FEATURES,
                        active_index,
                        on_feature_click,
                        opacity: frame.sidebar_opacity,
                        offset_x: frame.sidebar_x,
                    }
                    TransitionContent {
                        features: FEATURES,
                        active_index,
                        opacity: frame.content_opacity,
                        offset_x: frame.content_x,
                    }
                }
            }
        }

        FeatureShowcase { tabs, reduced_motion }
    }
}

/// Reports the index of whichever `data-feature-section` panel crosses the
/// vertical center of the viewport.
const SECTION_OBSERVER_JS: &str = r#"
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            if (!entry.isIntersecting) continue;
            const index = Number(entry.target.dataset.featureSection);
            if (Number.isInteger(index) && index >= 0) dioxus.send(index);
        }
    }, { rootMargin: "-50% 0px -50% 0px" });
    document.querySelectorAll("[data-feature-section]").forEach((el) => observer.observe(el));
"#;

/// Apply an index reported by the scroll observer. Indexes outside the
/// tab list are dropped, as are repeats of the active tab.
fn follow_scroll(tabs: &mut FeatureTabs, index: usize) -> bool {
    tabs.active() != index && tabs.select(index)
}

/// Sticky tab list beside every feature's panel. Selecting a tab scrolls
/// its panel into view, and scrolling moves the active tab to the panel
/// in the middle of the viewport.
#[component]
fn FeatureShowcase(tabs: Signal<FeatureTabs>, reduced_motion: bool) -> Element {
    use_effect(move || {
        spawn(async move {
            let mut tabs = tabs;
            let mut observer = document::eval(SECTION_OBSERVER_JS);
            while let Ok(index) = observer.recv::<usize>().await {
                let mut next = *tabs.peek();
                if follow_scroll(&mut next, index) {
                    tabs.set(next);
                    tracing::debug!(index, "feature tab followed scroll");
                }
            }
        });
    });

    let active_index = tabs.read().active();
    let on_feature_click = move |index: usize| {
        select_feature(tabs, index);
        scroll_to_section(index, reduced_motion);
    };

    rsx! {
        section { class: "feature-showcase",
            FeatureSidebar { features: FEATURES, active_index, on_feature_click }
            FeatureContent { features: FEATURES, active_index }
        }
    }
}

fn select_feature(mut tabs: Signal<FeatureTabs>, index: usize) {
    if tabs.write().select(index) {
        tracing::debug!(index, "feature tab selected");
    }
}

fn scroll_to_section(index: usize, reduced_motion: bool) {
    let behavior = if reduced_motion { "auto" } else { "smooth" };
    document::eval(&format!(
        r#"
        (function() {{
            var el = document.getElementById('feature-section-{index}');
            if (el) {{ el.scrollIntoView({{ behavior: '{behavior}', block: 'center' }}); }}
        }})();
        "#,
    ));
}
