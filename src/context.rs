//! Site Context
//!
//! Shared handles built once at startup and provided to every
//! component: the resolved config, the view-state store, and the two
//! trackers that would otherwise live as module globals.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::nav;
use crate::store::{SiteStateStoreFields, SiteStore};
use crate::theme;

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    pub store: SiteStore,
    /// Previous scroll position for the header hide/show direction test.
    pub last_scroll_y: RwSignal<f64>,
    /// Drives the theme toggle pulse animation.
    pub theme_pulsing: RwSignal<bool>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, store: SiteStore) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
            last_scroll_y: RwSignal::new(0.0),
            theme_pulsing: RwSignal::new(false),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Flip the theme, persist it, and pulse the toggle button. The
    /// `data-theme` attribute follows through the render effect.
    pub fn toggle_theme(&self) {
        let next = self.store.theme().get_untracked().toggled();
        self.store.theme().set(next);
        theme::persist(next);
        theme::pulse(self.theme_pulsing);
    }

    pub fn toggle_menu(&self) {
        nav::toggle_menu(self.store);
    }

    pub fn close_menu(&self) {
        nav::close_menu(self.store);
    }
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
