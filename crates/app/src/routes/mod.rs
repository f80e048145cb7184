pub mod home;
pub mod not_found;
pub mod resources;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdMoon, LdShield, LdSparkles, LdSun};
use dioxus_free_icons::Icon;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{Button, ButtonVariant};

use home::Home;
use not_found::NotFound;
use resources::Resources;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/resources?:category")]
    Resources { category: Option<String> },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar with the brand, page links and theme toggle above the routed page.
#[component]
fn SiteLayout() -> Element {
    let route: Route = use_route();
    let mut theme: ThemeState = use_context();
    let mode = (theme.mode)();
    let home_active = if matches!(route, Route::Home {}) { "true" } else { "false" };
    let resources_active = if matches!(route, Route::Resources { .. }) { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "site-header",
            div { class: "site-header-bar",
                Link { to: Route::Home {}, class: "site-brand",
                    Icon::<LdShield> { icon: LdShield, width: 24, height: 24 }
                    span { class: "site-brand-name", "Victim Support" }
                }

                nav { class: "site-nav", aria_label: "Main",
                    ul {
                        li { class: "site-nav-item", "data-active": home_active,
                            Link { to: Route::Home {},
                                Icon::<LdSparkles> { icon: LdSparkles, width: 18, height: 18 }
                                "Features"
                            }
                        }
                        li { class: "site-nav-item", "data-active": resources_active,
                            Link { to: Route::Resources { category: None },
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                "Resources"
                            }
                        }
                    }
                }

                div { class: "site-header-spacer" }

                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: mode.toggle_label(),
                    onclick: move |_| theme.toggle(),
                    if mode == ThemeMode::Dark {
                        Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                    } else {
                        Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                    }
                    span { class: "site-theme-label", "{mode.toggle_label()}" }
                }
            }
        }

        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}
