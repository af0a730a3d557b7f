//! Light/dark theme with a persisted preference.
//!
//! Uses a wrapper div with a data-theme attribute; the preference is read
//! once at startup and written on every toggle.

use dioxus::prelude::*;

use crate::prefs;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS data-theme attribute value, also the persisted string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted theme string.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle-button glyph, showing the mode the click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Global theme signal - use this throughout the app
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Theme toggle button - flips the theme and persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let current = *CURRENT_THEME.read();

    rsx! {
        button {
            class: "theme-toggle-button",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = CURRENT_THEME.read().toggled();
                *CURRENT_THEME.write() = next;
                prefs::save_theme(&prefs::default_data_dir(), next);
            },
            "{current.toggle_icon()}"
        }
    }
}

/// Themed wrapper component - wraps children with the data-theme attribute
/// for document-wide effect.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            "data-theme": theme.as_str(),
            class: "themed-root",
            {children}
        }
    }
}
