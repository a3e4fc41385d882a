//! Header Scroll Effect
//!
//! One window scroll listener feeds `HeaderFx::advance`; the navbar
//! renders the result as classes. The previous position lives in the
//! site context rather than a module global.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::store::{HeaderFx, SiteStateStoreFields, SiteStore};

pub fn bind_scroll_effect(store: SiteStore, last_scroll_y: RwSignal<f64>) {
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let y = dom::scroll_y();
        let fx = HeaderFx::advance(last_scroll_y.get_untracked(), y);
        last_scroll_y.set(y);
        // write only on change so bindings don't rerun per scroll event
        if store.header().get_untracked() != fx {
            store.header().set(fx);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}
