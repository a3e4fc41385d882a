//! Lazy Image Loader
//!
//! Images ship with their real source in `data-src` and only get it
//! promoted to `src` as they approach the viewport. Without
//! IntersectionObserver everything loads eagerly instead of never.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

/// Start fetching this far before the image enters the viewport.
const PRELOAD_MARGIN: &str = "50px";
const VISIBILITY_THRESHOLD: f64 = 0.1;

pub fn setup_lazy_images() {
    let Some(doc) = dom::document() else { return };
    let Ok(nodes) = doc.query_selector_all("img[data-src]") else { return };

    if !dom::intersection_observer_supported() {
        for img in deferred_images(&nodes) {
            promote(&img);
        }
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(img) = entry.target().dyn_into::<HtmlImageElement>() {
                    promote(&img);
                    observer.unobserve(&img);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(PRELOAD_MARGIN);
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for img in deferred_images(&nodes) {
                // cached images may be done before we ever observe them
                if img.complete() && img.natural_width() > 0 {
                    promote(&img);
                    continue;
                }
                observer.observe(&img);
            }
            on_intersect.forget();
        }
        Err(_) => {
            for img in deferred_images(&nodes) {
                promote(&img);
            }
        }
    }
}

fn deferred_images(nodes: &web_sys::NodeList) -> impl Iterator<Item = HtmlImageElement> + '_ {
    dom::elements(nodes).filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
}

/// Move `data-src` into `src` and mark the element for its fade-in.
fn promote(img: &HtmlImageElement) {
    if let Some(src) = img.get_attribute("data-src") {
        img.set_src(&src);
        let _ = img.remove_attribute("data-src");
    }
    let _ = img.class_list().add_1("loaded");
}
