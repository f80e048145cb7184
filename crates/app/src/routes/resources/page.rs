use dioxus::prelude::*;
use shared_types::{
    featured_resources, filter_resources, CategoryFilter, Resource, ResourcePreview, SiteConfig,
    RESOURCES,
};
use shared_ui::PageHeader;

use super::catalog::{CategoryFilterBar, FeaturedResources, ResourceList, ResourceSearch};
use super::{initial_category, reseed_category};
use super::preview::ResourcePreviewModal;
use super::support::{EmergencyContacts, ExternalLinks};

/// Resources & Support page.
///
/// Owns the search text, the selected category and the previewed resource.
/// The visible list is derived from the first two on every change.
#[component]
pub fn Resources(category: Option<String>) -> Element {
    let site: SiteConfig = use_context();
    let sections = site.sections.clone();
    let default_category = site.resources.default_category;

    let mut search_query = use_signal(String::new);
    let mut applied_query = use_signal(|| category.clone());
    let mut selected_category =
        use_signal(|| initial_category(category.as_deref(), default_category));
    let mut preview = use_signal(ResourcePreview::default);

    // The route reuses this component when only the query changes.
    use_effect(use_reactive((&category,), move |(category,)| {
        let next = reseed_category(&mut applied_query.write(), category, default_category);
        if let Some(next) = next {
            tracing::debug!(category = %next, "resource category reseeded from route");
            selected_category.set(next);
        }
    }));

    let filtered = use_memo(move || {
        filter_resources(RESOURCES, &search_query.read(), *selected_category.read())
    });
    let featured = featured_resources(RESOURCES);

    let on_search_change = move |value: String| search_query.set(value);

    let on_category_change = move |filter: CategoryFilter| {
        tracing::debug!(category = %filter, "resource category selected");
        selected_category.set(filter);
    };

    let on_select_resource = move |selection: Option<&'static Resource>| {
        match selection {
            Some(resource) => tracing::debug!(id = resource.id, "resource preview opened"),
            None => tracing::debug!("resource preview closed"),
        }
        preview.write().set(selection);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./resources.css") }

        div { class: "container resources-page",
            PageHeader {
                title: "Resources & Support",
                subtitle: "Access helpful guides, legal information, and support services",
            }

            if sections.emergency_contacts {
                EmergencyContacts {}
            }

            if sections.featured_resources {
                FeaturedResources { resources: featured, on_select_resource }
            }

            CategoryFilterBar {
                selected: selected_category(),
                on_category_change,
            }

            ResourceSearch {
                query: search_query(),
                on_search_change,
            }

            ResourceList {
                resources: filtered(),
                on_select_resource,
            }

            if sections.external_links {
                ExternalLinks {}
            }

            ResourcePreviewModal {
                preview: preview(),
                on_select_resource,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_helpers::resource_count_label;
    use shared_types::ResourceCategory;

    #[component]
    fn Harness(category: Option<String>) -> Element {
        use_context_provider(SiteConfig::default);
        rsx! {
            Resources { category }
        }
    }

    fn render(category: Option<&str>) -> String {
        let props = HarnessProps { category: category.map(str::to_string) };
        let mut dom = VirtualDom::new_with_props(Harness, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn category_query_seeds_the_list() {
        let legal = filter_resources(RESOURCES, "", CategoryFilter::Only(ResourceCategory::Legal));
        let html = render(Some("legal"));
        assert!(html.contains(&format!(">{}<", resource_count_label(legal.len()))), "{html}");
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1, "{html}");
    }

    #[test]
    fn no_query_lists_everything() {
        let html = render(None);
        assert!(html.contains(&format!(">{}<", resource_count_label(RESOURCES.len()))), "{html}");
    }
}
