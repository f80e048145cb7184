use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdLink, LdPhone};
use dioxus_free_icons::Icon;
use shared_types::{EMERGENCY_CONTACTS, EXTERNAL_LINKS};
use shared_ui::{Card, CardDescription, CardTitle};

/// Banner listing the emergency phone lines.
#[component]
pub fn EmergencyContacts() -> Element {
    rsx! {
        section { class: "emergency-banner", "aria-labelledby": "emergency-title",
            div { class: "emergency-heading",
                Icon::<LdPhone> { icon: LdPhone, width: 24, height: 24 }
                h2 { id: "emergency-title", "Need Immediate Help?" }
            }
            div { class: "emergency-grid",
                for contact in EMERGENCY_CONTACTS.iter() {
                    div { key: "{contact.name}", class: "emergency-contact",
                        h3 { "{contact.name}" }
                        a { class: "emergency-phone", href: "tel:{contact.phone}", "{contact.phone}" }
                        p { class: "emergency-hours",
                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                            "{contact.hours}"
                        }
                        p { class: "emergency-description", "{contact.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExternalLinks() -> Element {
    rsx! {
        section { class: "external-links",
            h2 { class: "section-title", "Additional Resources" }
            div { class: "external-grid",
                for link in EXTERNAL_LINKS.iter() {
                    a {
                        key: "{link.url}",
                        class: "external-link",
                        href: link.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Card { interactive: true,
                            div { class: "external-link-title",
                                CardTitle { "{link.name}" }
                                Icon::<LdLink> { icon: LdLink, width: 16, height: 16 }
                            }
                            CardDescription { "{link.description}" }
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

    #[test]
    fn external_links_open_in_isolated_tabs() {
        let mut dom = VirtualDom::new(ExternalLinks);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches(r#"target="_blank""#).count(), EXTERNAL_LINKS.len());
        assert_eq!(
            html.matches(r#"rel="noopener noreferrer""#).count(),
            EXTERNAL_LINKS.len()
        );
    }

    #[test]
    fn every_contact_gets_a_dial_link() {
        let mut dom = VirtualDom::new(EmergencyContacts);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        for contact in EMERGENCY_CONTACTS {
            assert!(html.contains(&format!(r#"href="tel:{}""#, contact.phone)), "{html}");
        }
    }
}
