use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Centered modal dialog built on the primitive dialog.
///
/// The primitive owns the open state plumbing, Escape handling and the
/// title/description wiring. Clicking the backdrop closes; clicks inside
/// the panel do not. Focus moves into the panel when it mounts.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "modal-overlay",
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            prim::DialogContent { class: "modal-panel",
                div {
                    class: "modal-surface",
                    tabindex: "-1",
                    onclick: move |evt| evt.stop_propagation(),
                    onmounted: move |evt: MountedEvent| async move {
                        let _ = evt.set_focus(true).await;
                    },
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn ModalHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Dialog heading; the primitive links it to the panel's `aria-labelledby`.
#[component]
pub fn ModalTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn ModalDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

#[component]
pub fn ModalBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-body", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn ModalFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// The "×" button in a modal header.
#[component]
pub fn ModalClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(open: bool) -> Element {
        rsx! {
            Modal { open, on_close: move |_| {},
                ModalHeader {
                    ModalTitle { "Preview" }
                    ModalClose { on_close: move |_| {} }
                }
                ModalBody {
                    ModalDescription { "Details" }
                }
            }
        }
    }

    fn render(open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { open });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_modal_renders_no_dialog() {
        let html = render(false);
        assert!(!html.contains(r#"role="dialog""#), "{html}");
        assert!(!html.contains("Preview"), "{html}");
    }

    #[test]
    fn open_modal_renders_through_the_dialog_primitive() {
        let html = render(true);
        assert!(html.contains("modal-overlay"), "{html}");
        assert!(html.contains("modal-panel"), "{html}");
        assert!(html.contains(r#"role="dialog""#), "{html}");
        // The title id is assigned by the primitive.
        assert!(html.contains("aria-labelledby="), "{html}");
        assert!(html.contains("modal-title"), "{html}");
        assert!(html.contains(r#"aria-label="Close""#), "{html}");
    }
}
