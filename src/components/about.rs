//! About Section
//!
//! Bio with a deferred portrait, plus the skills grid. The content
//! block and every skill card are reveal targets.

use leptos::prelude::*;

const SKILLS: [(&str, &str, &str); 4] = [
    ("fas fa-code", "Frontend", "Rust/WASM, TypeScript, responsive CSS"),
    ("fas fa-server", "Backend", "Rust, Python, PostgreSQL, REST APIs"),
    ("fas fa-mobile-alt", "Responsive Design", "Mobile-first layouts that hold up on any screen"),
    ("fas fa-tools", "Tooling", "Git, CI pipelines, Linux, containers"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-content">
                <div class="about-portrait">
                    <img
                        data-src="assets/portrait.svg"
                        alt="Portrait of John Doe"
                        class="about-photo"
                        width="320"
                        height="320"
                    />
                </div>
                <div class="about-text">
                    <p>
                        "I'm a full-stack developer with five years of experience "
                        "turning rough ideas into production software. I care about "
                        "fast pages, honest error messages and interfaces that stay "
                        "out of the way."
                    </p>
                    <p>
                        "Away from the keyboard I climb, roast coffee and contribute "
                        "to open source. The best way to reach me is the form below."
                    </p>
                </div>
            </div>
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|(icon, title, detail)| {
                        view! {
                            <div class="skill-card">
                                <i class=*icon></i>
                                <h3>{*title}</h3>
                                <p>{*detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
