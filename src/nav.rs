//! Navigation Controller
//!
//! Mobile menu state machine. The toggle button flips it, link clicks
//! close it, and two document-level listeners handle outside clicks and
//! Escape. Listeners are bound once at startup and never removed.

use leptos::prelude::{GetUntracked, Set, Update};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::store::{SiteStateStoreFields, SiteStore};

/// The menu is statically visible at or above this width, so outside
/// clicks only dismiss below it.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Glyph for the toggle button: bars closed, times open.
pub fn menu_icon_class(open: bool) -> &'static str {
    if open {
        "fas fa-times"
    } else {
        "fas fa-bars"
    }
}

/// Whether a document click should close the open menu. Clicks inside
/// the menu or on the toggle button are the toggle's own business.
pub fn should_dismiss(viewport_width: f64, inside_menu: bool, on_toggle: bool) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX && !inside_menu && !on_toggle
}

pub fn toggle_menu(store: SiteStore) {
    store.menu_open().update(|open| *open = !*open);
}

/// Idempotent: closing a closed menu writes nothing.
pub fn close_menu(store: SiteStore) {
    if store.menu_open().get_untracked() {
        store.menu_open().set(false);
    }
}

/// Render step for the open menu: lock page scroll behind it.
pub fn apply_scroll_lock(open: bool) {
    if let Some(body) = dom::document().and_then(|doc| doc.body()) {
        if open {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}

/// Bind the document-level dismissal listeners: click outside the menu
/// and Escape both close it.
pub fn bind_global_dismiss(store: SiteStore) {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !store.menu_open().get_untracked() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        let inside_menu = target_within(target.as_ref(), ".nav-menu");
        let on_toggle = target_within(target.as_ref(), ".nav-toggle");
        if should_dismiss(dom::viewport_width(), inside_menu, on_toggle) {
            store.menu_open().set(false);
        }
    });
    let on_keydown =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" {
                close_menu(store);
            }
        });

    if let Some(doc) = dom::document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        let _ =
            doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_click.forget();
    on_keydown.forget();
}

fn target_within(target: Option<&web_sys::Element>, selector: &str) -> bool {
    target
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_swaps_with_menu_state() {
        assert_eq!(menu_icon_class(false), "fas fa-bars");
        assert_eq!(menu_icon_class(true), "fas fa-times");
    }

    #[test]
    fn test_outside_click_dismisses_below_breakpoint() {
        assert!(should_dismiss(480.0, false, false));
    }

    #[test]
    fn test_clicks_inside_menu_or_on_toggle_do_not_dismiss() {
        assert!(!should_dismiss(480.0, true, false));
        assert!(!should_dismiss(480.0, false, true));
    }

    #[test]
    fn test_desktop_clicks_never_dismiss() {
        assert!(!should_dismiss(1280.0, false, false));
        assert!(!should_dismiss(MOBILE_BREAKPOINT_PX, false, false));
    }
}
