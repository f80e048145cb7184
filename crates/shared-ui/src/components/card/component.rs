use dioxus::prelude::*;

/// Base class for a card part, followed by any caller attributes.
fn part(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Like [`part`], adding the two-line clamp marker when `clamp` is set.
fn clamped_part(class: &'static str, clamp: bool, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let mut base = vec![Attribute::new("class", class, None, false)];
    if clamp {
        base.push(Attribute::new("data-clamp", "true", None, false));
    }
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Bordered surface used for resource entries and info panels.
///
/// `interactive` cards lift on hover; use it when the whole card (or the
/// element wrapping it) is clickable.
#[component]
pub fn Card(
    #[props(default)] interactive: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![Attribute::new("class", "card", None, false)];
    if interactive {
        base.push(Attribute::new("data-interactive", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Top row: icon tile on the left, badges on the right.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(default)] clamp: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = clamped_part("card-title", clamp, attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(default)] clamp: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = clamped_part("card-description", clamp, attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

/// Tinted square holding a glyph.
#[component]
pub fn CardIcon(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-icon", attributes);
    rsx! {
        div { ..merged, "aria-hidden": "true", {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Bottom row of a card: metadata on the left, actions on the right.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}
