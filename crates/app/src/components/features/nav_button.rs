use dioxus::prelude::*;
use shared_types::Feature;

use crate::icons::GlyphIcon;

/// A selectable tab for one feature.
///
/// The description and the indicator dot only render while the tab is
/// active. Enter and Space activate the tab like a click.
#[component]
pub fn FeatureNavButton(
    feature: &'static Feature,
    active_index: usize,
    on_click: EventHandler<usize>,
) -> Element {
    let index = feature.order;
    let is_active = index == active_index;
    let flag = if is_active { "true" } else { "false" };

    rsx! {
        button {
            r#type: "button",
            class: "feature-nav-button",
            "data-active": flag,
            role: "tab",
            id: feature.tab_id(),
            "aria-controls": feature.section_id(),
            "aria-selected": flag,
            "aria-pressed": flag,
            tabindex: if is_active { "0" } else { "-1" },
            onclick: move |_| on_click.call(index),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    on_click.call(index);
                }
            },
            div { class: "feature-nav-row",
                div { class: "feature-nav-icon",
                    GlyphIcon { glyph: feature.glyph, size: 20 }
                }
                div { class: "feature-nav-text",
                    h3 { class: "feature-nav-title", "{feature.title}" }
                    if is_active {
                        p { class: "feature-nav-description", "{feature.description}" }
                    }
                }
                if is_active {
                    div { class: "feature-nav-dot", "aria-hidden": "true" }
                }
            }
        }
    }
}

/// Keys that activate a focused button-like element.
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::FEATURES;

    #[component]
    fn Harness(index: usize, active_index: usize) -> Element {
        rsx! {
            FeatureNavButton {
                feature: &FEATURES[index],
                active_index,
                on_click: move |_| {},
            }
        }
    }

    fn render(index: usize, active_index: usize) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { index, active_index });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn active_tab_shows_description_and_dot() {
        let html = render(1, 1);
        assert!(html.contains(r#"aria-selected="true""#), "{html}");
        assert!(html.contains(r#"tabindex="0""#), "{html}");
        assert!(html.contains("feature-nav-dot"), "{html}");
        assert!(html.contains(FEATURES[1].description), "{html}");
    }

    #[test]
    fn inactive_tab_hides_description() {
        let html = render(1, 0);
        assert!(html.contains(r#"aria-selected="false""#), "{html}");
        assert!(html.contains(r#"tabindex="-1""#), "{html}");
        assert!(!html.contains("feature-nav-dot"), "{html}");
        assert!(!html.contains(FEATURES[1].description), "{html}");
        assert!(html.contains(FEATURES[1].title), "{html}");
    }

    #[test]
    fn tab_controls_its_section() {
        let html = render(4, 0);
        assert!(html.contains(r#"id="feature-tab-4""#), "{html}");
        assert!(html.contains(r#"aria-controls="feature-section-4""#), "{html}");
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Tab));
    }
}
