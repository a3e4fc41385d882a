//! Smooth Scroll Router
//!
//! In-page anchor clicks scroll the target to just below the fixed
//! header instead of jumping. Header height is measured at click time
//! because it changes across breakpoints.

use wasm_bindgen::JsCast;

use crate::nav;
use crate::store::SiteStore;

const HEADER_SELECTOR: &str = "#header";

/// Fragment portion of an in-page href. A bare `"#"` routes nowhere.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Absolute document offset that puts the target's top right below the
/// header.
pub fn target_offset(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height
}

/// Shared click handler for in-page anchors. When the fragment resolves
/// to an element, the mobile menu closes and the page animates there;
/// otherwise the click does nothing at all.
pub fn anchor_handler(
    store: SiteStore,
    href: &'static str,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(id) = fragment_id(href) else { return };
        let Some(doc) = crate::dom::document() else { return };
        let Some(target) = doc.get_element_by_id(id) else { return };

        nav::close_menu(store);
        smooth_scroll_to(&target);
    }
}

fn header_height() -> f64 {
    crate::dom::document()
        .and_then(|doc| doc.query_selector(HEADER_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

fn smooth_scroll_to(target: &web_sys::Element) {
    let Some(win) = web_sys::window() else { return };
    let top = target_offset(
        target.get_bounding_client_rect().top(),
        crate::dom::scroll_y(),
        header_height(),
    );

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id_extracts_target() {
        assert_eq!(fragment_id("#projects"), Some("projects"));
        assert_eq!(fragment_id("#home"), Some("home"));
    }

    #[test]
    fn test_bare_hash_and_plain_urls_route_nowhere() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_offset_lands_target_below_header() {
        // target 400px below the viewport top, page already 600px down,
        // 80px header: stop at 920 so the target top sits at 80.
        assert_eq!(target_offset(400.0, 600.0, 80.0), 920.0);
    }

    #[test]
    fn test_offset_with_no_header_is_exact() {
        assert_eq!(target_offset(250.0, 0.0, 0.0), 250.0);
    }
}
