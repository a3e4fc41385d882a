//! Viewport Height Corrector
//!
//! Mobile browsers grow and shrink the viewport as their toolbars
//! collapse, which makes CSS `100vh` lie. Publish 1% of the real inner
//! height as `--vh` and let full-height sections use
//! `calc(var(--vh) * 100)` instead.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;

pub fn update_vh() {
    let Some(height) = dom::inner_height() else { return };
    let Some(root) = dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let _ = root.style().set_property("--vh", &format!("{}px", height * 0.01));
}

pub fn bind_viewport_correction() {
    update_vh();
    let on_change = Closure::<dyn FnMut()>::new(update_vh);
    if let Some(win) = web_sys::window() {
        for event in ["resize", "orientationchange"] {
            let _ = win.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
        }
    }
    on_change.forget();
}
