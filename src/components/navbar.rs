//! Navbar Component
//!
//! Fixed header: brand, section links, theme toggle and the mobile menu
//! button. Header and menu classes render straight from the store.

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::nav;
use crate::scroll;
use crate::store::SiteStateStoreFields;
use crate::theme::Theme;

const NAV_LINKS: [(&str, &str); 4] =
    [("#home", "Home"), ("#about", "About"), ("#projects", "Projects"), ("#contact", "Contact")];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_site_context();
    let store = ctx.store;

    let header_class = move || {
        let fx = store.header().get();
        if fx.hidden {
            "header nav-hidden"
        } else if fx.scrolled {
            "header scrolled"
        } else {
            "header"
        }
    };
    let menu_class = move || {
        if store.menu_open().get() {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    };
    let toggle_icon = move || nav::menu_icon_class(store.menu_open().get());
    let theme_button_class = move || {
        if ctx.theme_pulsing.get() {
            "theme-toggle theme-pulse"
        } else {
            "theme-toggle"
        }
    };
    let theme_icon = move || match store.theme().get() {
        Theme::Dark => "fas fa-sun",
        Theme::Light => "fas fa-moon",
    };

    view! {
        <header id="header" class=header_class>
            <nav class="navbar">
                <a href="#home" class="nav-brand" on:click=scroll::anchor_handler(store, "#home")>
                    "John" <span class="accent">"Doe"</span>
                </a>
                <ul class=menu_class>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        on:click=scroll::anchor_handler(store, href)
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class=theme_button_class
                        aria-label="Toggle color theme"
                        on:click=move |_| ctx.toggle_theme()
                    >
                        <i class=theme_icon></i>
                    </button>
                    <button
                        class="nav-toggle"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| ctx.toggle_menu()
                    >
                        <i class=toggle_icon></i>
                    </button>
                </div>
            </nav>
        </header>
    }
}
