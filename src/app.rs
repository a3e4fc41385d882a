//! Portfolio Frontend App
//!
//! Root component: resolves the startup theme, builds the site context,
//! wires the global event table and renders the page sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{About, Contact, Footer, Hero, Navbar, Projects};
use crate::config::SiteConfig;
use crate::context::SiteContext;
use crate::effects;
use crate::nav;
use crate::store::{SiteState, SiteStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SiteState { theme: theme::init_theme(), ..Default::default() });
    let ctx = SiteContext::new(SiteConfig::from_build_env(), store);

    // Provide context to all children
    provide_context(ctx);

    bind_global_events(ctx);

    // Render step, document level: the theme attribute and the body
    // scroll lock are the only two writes outside component bindings.
    Effect::new(move |_| theme::apply(store.theme().get()));
    Effect::new(move |_| nav::apply_scroll_lock(store.menu_open().get()));

    // Observers want the rendered sections; effects run after mount and
    // this one tracks nothing, so it fires exactly once.
    Effect::new(move |_| {
        effects::lazy::setup_lazy_images();
        effects::reveal::setup_reveal_animations();
    });

    view! {
        <Navbar />
        <main>
            <Hero />
            <About />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}

/// Every page-wide listener in one table:
/// - document click / keydown: close the mobile menu
/// - window scroll: header shadow and hide-on-scroll-down
/// - window resize / orientationchange: the `--vh` unit
fn bind_global_events(ctx: SiteContext) {
    nav::bind_global_dismiss(ctx.store);
    effects::header::bind_scroll_effect(ctx.store, ctx.last_scroll_y);
    effects::viewport::bind_viewport_correction();
}
