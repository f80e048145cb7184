use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};

mod components;
mod config;
mod format_helpers;
mod icons;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = use_context_provider(config::load_site_config);
    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    });

    let reduced_motion = if site.sections.reduced_motion { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        div { class: "site-root", "data-reduced-motion": reduced_motion,
            ThemeSeed {}
            Router::<Route> {}
        }
    }
}
