use dioxus::prelude::*;

use crate::routes::Route;

/// Where to send a visitor who hit an unknown path: anything that looks
/// like a resources URL goes to the resources page, everything else home.
fn suggested_route(segments: &[String]) -> (Route, &'static str) {
    let looks_like_resources = segments
        .first()
        .is_some_and(|s| s.to_ascii_lowercase().starts_with("resource"));
    if looks_like_resources {
        (Route::Resources { category: None }, "Browse Resources")
    } else {
        (Route::Home {}, "Back to Home")
    }
}

/// 404 page echoing the requested path.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::warn!(%path, "no route matched");
    let (target, label) = suggested_route(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &str) -> Vec<String> {
        path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
    }

    #[test]
    fn resource_like_paths_suggest_the_resources_page() {
        let (route, label) = suggested_route(&segments("/Resource/42"));
        assert_eq!(route, Route::Resources { category: None });
        assert_eq!(label, "Browse Resources");
    }

    #[test]
    fn other_paths_suggest_home() {
        assert_eq!(suggested_route(&segments("/dashboard")).0, Route::Home {});
        assert_eq!(suggested_route(&[]).0, Route::Home {});
    }
}
