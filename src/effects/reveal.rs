//! Scroll-Triggered Reveal
//!
//! Content cards start translated down and transparent; entering the
//! viewport adds `visible` and the CSS transition does the rest. One
//! way only: revealed elements are unobserved, scrolling back up never
//! hides them again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const REVEAL_SELECTOR: &str = ".project-card, .skill-card, .about-content, .contact-content";
const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so the reveal fires a little before the
/// element fully enters.
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";

pub fn setup_reveal_animations() {
    let Some(doc) = dom::document() else { return };
    let Ok(nodes) = doc.query_selector_all(REVEAL_SELECTOR) else { return };

    // without an observer the cards must not stay hidden forever
    if !dom::intersection_observer_supported() {
        for el in dom::elements(&nodes) {
            let _ = el.class_list().add_1("visible");
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
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for el in dom::elements(&nodes) {
                observer.observe(&el);
            }
            on_intersect.forget();
        }
        Err(_) => {
            for el in dom::elements(&nodes) {
                let _ = el.class_list().add_1("visible");
            }
        }
    }
}
