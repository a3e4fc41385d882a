//! Browser Globals
//!
//! Small shared accessors over the web-sys globals used across the page.

use wasm_bindgen::{JsCast, JsValue};

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Old browsers ship without IntersectionObserver; callers degrade
/// to eager behavior when this is false.
pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|win| {
            js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Iterate a query result as elements, skipping non-element nodes.
pub fn elements(nodes: &web_sys::NodeList) -> impl Iterator<Item = web_sys::Element> + '_ {
    (0..nodes.length()).filter_map(|i| nodes.item(i)?.dyn_into::<web_sys::Element>().ok())
}
