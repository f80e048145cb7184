use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdEye, LdFileText, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{CategoryFilter, Resource, CATEGORIES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardIcon, CardTitle, SearchInput,
};

use crate::components::features::is_activation_key;
use crate::format_helpers::{downloads_label, resource_count_label};
use crate::icons::GlyphIcon;

/// Pair each resource with its entrance delay in milliseconds.
fn staggered<'a>(
    resources: &'a [&'static Resource],
    base: usize,
    step: usize,
) -> impl Iterator<Item = (usize, &'static Resource)> + 'a {
    resources
        .iter()
        .copied()
        .enumerate()
        .map(move |(i, resource)| (base + i * step, resource))
}

/// One toggle button per category; exactly one is pressed.
#[component]
pub fn CategoryFilterBar(
    selected: CategoryFilter,
    on_category_change: EventHandler<CategoryFilter>,
) -> Element {
    rsx! {
        div { class: "category-filter", role: "group", "aria-label": "Filter by category",
            for category in CATEGORIES.iter() {
                Button {
                    key: "{category.id()}",
                    variant: if category.filter == selected { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    pressed: category.filter == selected,
                    onclick: {
                        let filter = category.filter;
                        move |_| on_category_change.call(filter)
                    },
                    GlyphIcon { glyph: category.glyph, size: 16 }
                    span { "{category.label}" }
                }
            }
        }
    }
}

#[component]
pub fn ResourceSearch(query: String, on_search_change: EventHandler<String>) -> Element {
    rsx! {
        SearchInput {
            value: query,
            on_change: on_search_change,
            placeholder: "Search resources by title, topic, or keyword...",
            label: "Search resources",
            Icon::<LdSearch> { icon: LdSearch, width: 20, height: 20 }
        }
    }
}

/// The featured subset as large clickable tiles.
#[component]
pub fn FeaturedResources(
    resources: Vec<&'static Resource>,
    on_select_resource: EventHandler<Option<&'static Resource>>,
) -> Element {
    rsx! {
        section { class: "featured-resources",
            h2 { class: "section-title", "Featured Resources" }
            div { class: "featured-grid",
                for (delay, resource) in staggered(&resources, 300, 100) {
                    div {
                        key: "{resource.id}",
                        class: "featured-item",
                        style: "animation-delay: {delay}ms;",
                        role: "button",
                        tabindex: "0",
                        onclick: move |_| on_select_resource.call(Some(resource)),
                        onkeydown: move |evt: KeyboardEvent| {
                            if is_activation_key(&evt.key()) {
                                evt.prevent_default();
                                on_select_resource.call(Some(resource));
                            }
                        },
                        Card { class: "featured-card", interactive: true,
                            CardHeader {
                                CardIcon { GlyphIcon { glyph: resource.glyph, size: 24 } }
                                Badge { variant: BadgeVariant::Featured, "Featured" }
                            }
                            CardTitle { clamp: true, "{resource.title}" }
                            CardDescription { clamp: true, "{resource.description}" }
                            CardFooter {
                                span { "{resource.kind}" }
                                span { {downloads_label(resource.download_count)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The filtered list with its count, or the empty state.
#[component]
pub fn ResourceList(
    resources: Vec<&'static Resource>,
    on_select_resource: EventHandler<Option<&'static Resource>>,
) -> Element {
    let count = resource_count_label(resources.len());

    rsx! {
        section { class: "resource-list",
            div { class: "resource-list-header",
                h2 { class: "section-title", "All Resources" }
                span { class: "resource-count", "{count}" }
            }

            if resources.is_empty() {
                div { class: "empty-state",
                    Icon::<LdFileText> { icon: LdFileText, width: 64, height: 64 }
                    p { "No resources found matching your criteria" }
                }
            }

            for (delay, resource) in staggered(&resources, 0, 50) {
                ResourceCard { key: "{resource.id}", resource, delay, on_select_resource }
            }
        }
    }
}

#[component]
pub fn ResourceCard(
    resource: &'static Resource,
    delay: usize,
    on_select_resource: EventHandler<Option<&'static Resource>>,
) -> Element {
    let downloads = downloads_label(resource.download_count);

    rsx! {
        Card { class: "resource-card", style: "animation-delay: {delay}ms;",
            div { class: "resource-card-row",
                CardIcon { GlyphIcon { glyph: resource.glyph, size: 24 } }
                CardContent {
                    CardTitle { "{resource.title}" }
                    CardDescription { "{resource.description}" }
                    div { class: "topic-list",
                        for topic in resource.topics.iter() {
                            Badge { key: "{topic}", variant: BadgeVariant::Secondary, "{topic}" }
                        }
                    }
                    CardFooter {
                        div { class: "resource-meta",
                            span { "{resource.kind}" }
                            span { "aria-hidden": "true", "\u{2022}" }
                            span { "{resource.size}" }
                            span { "aria-hidden": "true", "\u{2022}" }
                            span { "{resource.length}" }
                            span { "aria-hidden": "true", "\u{2022}" }
                            span { "{downloads}" }
                        }
                        div { class: "resource-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| on_select_resource.call(Some(resource)),
                                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                "Preview"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| tracing::info!(id = resource.id, "download requested"),
                                Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                "Download"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{filter_resources, ResourceCategory, RESOURCES};

    #[component]
    fn ListHarness(query: String, category: CategoryFilter) -> Element {
        let resources = filter_resources(RESOURCES, &query, category);
        rsx! {
            ResourceList { resources, on_select_resource: move |_| {} }
        }
    }

    fn render_list(query: &str, category: CategoryFilter) -> String {
        let props = ListHarnessProps { query: query.to_string(), category };
        let mut dom = VirtualDom::new_with_props(ListHarness, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn FilterHarness(selected: CategoryFilter) -> Element {
        rsx! {
            CategoryFilterBar { selected, on_category_change: move |_| {} }
        }
    }

    #[component]
    fn FeaturedHarness() -> Element {
        let resources = shared_types::featured_resources(RESOURCES);
        rsx! {
            FeaturedResources { resources, on_select_resource: move |_| {} }
        }
    }

    #[test]
    fn stagger_offsets_from_base() {
        let featured = shared_types::featured_resources(RESOURCES);
        let delays: Vec<usize> = staggered(&featured, 300, 100).map(|(d, _)| d).collect();
        assert_eq!(delays, vec![300, 400, 500]);
    }

    #[test]
    fn empty_result_shows_empty_state() {
        let html = render_list("no such thing", CategoryFilter::All);
        assert!(html.contains("No resources found matching your criteria"), "{html}");
        assert!(html.contains("0 resources"), "{html}");
        assert!(!html.contains("resource-card"), "{html}");
    }

    #[test]
    fn faq_timeline_lists_one_card() {
        let html = render_list("timeline", CategoryFilter::Only(ResourceCategory::Faq));
        assert!(html.contains("1 resource<"), "{html}");
        assert!(html.contains("Frequently Asked Questions"), "{html}");
        assert!(html.contains("Investigation Timeline"), "{html}");
        assert!(!html.contains("No resources found"), "{html}");
    }

    #[test]
    fn video_resource_shows_duration_instead_of_pages() {
        let html = render_list("social media", CategoryFilter::All);
        assert!(html.contains("15:30"), "{html}");
        assert!(!html.contains(" pages<"), "{html}");
    }

    #[test]
    fn filter_bar_presses_only_the_selected_category() {
        let props = FilterHarnessProps {
            selected: CategoryFilter::Only(ResourceCategory::Legal),
        };
        let mut dom = VirtualDom::new_with_props(FilterHarness, props);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-pressed="false""#).count(), CATEGORIES.len() - 1);
        assert!(html.contains("Legal Information"), "{html}");
    }

    #[test]
    fn featured_tiles_are_focusable_buttons_with_clamped_text() {
        let mut dom = VirtualDom::new(FeaturedHarness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches(r#"role="button""#).count(), 3, "{html}");
        assert_eq!(html.matches(r#"tabindex="0""#).count(), 3, "{html}");
        assert_eq!(html.matches(r#"data-interactive="true""#).count(), 3, "{html}");
        assert_eq!(html.matches(r#"data-clamp="true""#).count(), 6, "{html}");
    }

    #[test]
    fn featured_tiles_open_on_enter_and_space() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Tab));
    }
}
