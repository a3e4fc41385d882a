//! Theme Manager
//!
//! Light/dark preference persisted in localStorage and reflected as the
//! `data-theme` attribute on the document element. When nothing is
//! stored, the OS color scheme decides, and a dark OS preference is
//! written back so later visits skip the media query.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dom;

pub const THEME_KEY: &str = "portfolio-theme";

/// Length of the toggle button pulse animation.
const PULSE_MS: u32 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Resolve the startup theme from the persisted value and the OS
/// preference. The bool says whether to persist the result now: only
/// the dark OS fallback is written back.
pub fn initial_theme(stored: Option<Theme>, system_prefers_dark: bool) -> (Theme, bool) {
    match stored {
        Some(theme) => (theme, false),
        None if system_prefers_dark => (Theme::Dark, true),
        None => (Theme::Light, false),
    }
}

/// Read, apply and (when falling back to a dark OS preference) persist
/// the startup theme. Returns the resolved theme for the store seed.
pub fn init_theme() -> Theme {
    let (theme, persist_now) = initial_theme(read_stored(), system_prefers_dark());
    apply(theme);
    if persist_now {
        persist(theme);
    }
    theme
}

pub fn read_stored() -> Option<Theme> {
    let value = dom::local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Render step: reflect the theme on the document element so the CSS
/// custom properties switch.
pub fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Storage failures (private browsing, blocked cookies) are a no-op.
pub fn persist(theme: Theme) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

/// Drive the toggle button pulse flag for one animation beat.
pub fn pulse(pulsing: RwSignal<bool>) {
    pulsing.set(true);
    spawn_local(async move {
        TimeoutFuture::new(PULSE_MS).await;
        pulsing.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins_over_system() {
        assert_eq!(initial_theme(Some(Theme::Light), true), (Theme::Light, false));
        assert_eq!(initial_theme(Some(Theme::Dark), false), (Theme::Dark, false));
    }

    #[test]
    fn test_dark_system_fallback_is_persisted() {
        assert_eq!(initial_theme(None, true), (Theme::Dark, true));
    }

    #[test]
    fn test_light_default_is_not_persisted() {
        assert_eq!(initial_theme(None, false), (Theme::Light, false));
    }

    #[test]
    fn test_round_trip_through_storage_string() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
