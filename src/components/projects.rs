//! Projects Section
//!
//! Card grid of selected work. Card images defer loading and the cards
//! themselves reveal on scroll.

use leptos::prelude::*;

struct Project {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    code_url: &'static str,
    demo_url: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Taskboard",
        blurb: "Kanban board with offline sync and conflict-free merges. \
                Runs entirely in the browser, state lives in IndexedDB.",
        image: "assets/project-taskboard.svg",
        tags: &["Rust", "WASM", "IndexedDB"],
        code_url: "https://github.com/johndoe/taskboard",
        demo_url: "https://taskboard.johndoe.dev",
    },
    Project {
        title: "Wordwind",
        blurb: "Multiplayer word game over WebSockets. Rooms of up to \
                eight players, server authoritative scoring.",
        image: "assets/project-wordwind.svg",
        tags: &["TypeScript", "WebSockets", "Redis"],
        code_url: "https://github.com/johndoe/wordwind",
        demo_url: "https://wordwind.johndoe.dev",
    },
    Project {
        title: "Shutterlog",
        blurb: "Photo journal generator: point it at a folder of RAW \
                files and get a static gallery with EXIF captions.",
        image: "assets/project-shutterlog.svg",
        tags: &["Rust", "CLI", "Static Sites"],
        code_url: "https://github.com/johndoe/shutterlog",
        demo_url: "https://shutterlog.johndoe.dev",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <h2 class="section-title">"Things I've Built"</h2>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <img
                                    data-src=project.image
                                    alt=format!("{} screenshot", project.title)
                                    class="project-image"
                                    width="400"
                                    height="240"
                                />
                                <div class="project-body">
                                    <h3>{project.title}</h3>
                                    <p>{project.blurb}</p>
                                    <ul class="project-tags">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <li>{*tag}</li> })
                                            .collect_view()}
                                    </ul>
                                    <div class="project-links">
                                        <a
                                            href=project.code_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            <i class="fab fa-github"></i>
                                            " Code"
                                        </a>
                                        <a
                                            href=project.demo_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            <i class="fas fa-external-link-alt"></i>
                                            " Live"
                                        </a>
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
