use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Toggle state for filter-style buttons; emits `aria-pressed` when set.
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if let Some(pressed) = props.pressed {
        let value = if pressed { "true" } else { "false" };
        base.push(Attribute::new("aria-pressed", value, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn ToggleRow() -> Element {
        rsx! {
            Button { variant: ButtonVariant::Primary, pressed: true, "On" }
            Button { variant: ButtonVariant::Outline, pressed: false, "Off" }
            Button { variant: ButtonVariant::Ghost, "Plain" }
        }
    }

    #[test]
    fn pressed_state_is_exposed() {
        let mut dom = VirtualDom::new(ToggleRow);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"aria-pressed="true""#), "{html}");
        assert!(html.contains(r#"aria-pressed="false""#), "{html}");
        assert_eq!(html.matches("aria-pressed").count(), 2, "{html}");
    }
}
