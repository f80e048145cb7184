use dioxus::prelude::*;

/// Color mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Value of the `data-theme` attribute and of the persisted cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored key, falling back to dark.
    pub fn from_key(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Label for the toggle button: names the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        }
    }
}

/// Shared theme state provided as context by the layout.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Flip the mode and apply it to the document.
    pub fn toggle(&mut self) {
        let next = self.mode.read().toggled();
        self.mode.set(next);
        set_theme(next);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie, applies it to the document root
/// and syncs the [`ThemeState`] context. Render once, below the provider.
#[component]
pub fn ThemeSeed() -> Element {
    let mut theme = use_context::<ThemeState>();

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'dark';
                document.documentElement.setAttribute('data-theme', theme);
                return theme;
                "#,
            )
            .await;
            if let Ok(value) = stored {
                if let Some(key) = value.as_str() {
                    theme.mode.set(ThemeMode::from_key(key));
                }
            }
        });
    });

    rsx! {}
}

/// Set the active mode, persisting it to a cookie and updating the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
