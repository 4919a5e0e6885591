//! Built-in themes and legacy name handling.

use serde::Serialize;

use crate::shared::preferences::{PreferenceError, PreferenceStore};

/// Preference key holding the active theme.
pub const THEME_KEY: &str = "theme";

pub const DEFAULT_THEME: &str = "modern-light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Value for the page's `theme-color` meta tag.
    pub theme_color: &'static str,
    /// Class added to the page body; empty for the default look.
    pub body_class: &'static str,
}

pub const THEMES: [Theme; 3] = [
    Theme {
        key: "modern-light",
        name: "Modern Light",
        description: "Clean glassmorphism",
        theme_color: "#667eea",
        body_class: "",
    },
    Theme {
        key: "modern-dark",
        name: "Modern Dark",
        description: "Sleek dark mode",
        theme_color: "#0f1419",
        body_class: "theme-tron",
    },
    Theme {
        key: "rustic",
        name: "Holmes",
        description: "Victorian elegance",
        theme_color: "#8b4513",
        body_class: "theme-holmes",
    },
];

pub fn find(key: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.key == key)
}

fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Map any stored or user-supplied name to a catalogue key.
///
/// Legacy names map to their successors; anything unknown falls back to
/// `modern-light`.
pub fn normalize_theme(input: &str) -> &'static str {
    let lowered = input.trim().to_lowercase();
    match lowered.as_str() {
        "dark" | "tron" => "modern-dark",
        "light" | "liquid" => "modern-light",
        other => find(other).map_or(DEFAULT_THEME, |t| t.key),
    }
}

fn resolve(input: &str) -> &'static Theme {
    find(normalize_theme(input)).unwrap_or_else(default_theme)
}

/// Theme stored in `store`, normalized. Missing values give the default.
pub fn init_theme(store: &dyn PreferenceStore) -> Result<&'static Theme, PreferenceError> {
    let saved = store.get(THEME_KEY)?;
    let theme = resolve(saved.as_deref().unwrap_or_default());
    tracing::debug!(saved = ?saved, theme = theme.key, "theme initialized");
    Ok(theme)
}

/// Normalize `input`, persist it and return the applied theme.
pub fn apply_theme(
    store: &dyn PreferenceStore,
    input: &str,
) -> Result<&'static Theme, PreferenceError> {
    let theme = resolve(input);
    store.set(THEME_KEY, theme.key)?;
    tracing::info!(input, theme = theme.key, "theme applied");
    Ok(theme)
}
