//! Hero Section

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::scroll;

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_site_context().store;

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">"Hi, my name is"</p>
                <h1 class="hero-title">"John Doe."</h1>
                <h2 class="hero-subtitle">"I build things for the web."</h2>
                <p class="hero-text">
                    "Full-stack developer focused on fast, accessible web apps. "
                    "Currently open to freelance work and interesting problems."
                </p>
                <div class="hero-cta">
                    <a
                        href="#projects"
                        class="btn btn-primary"
                        on:click=scroll::anchor_handler(store, "#projects")
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn-outline"
                        on:click=scroll::anchor_handler(store, "#contact")
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
