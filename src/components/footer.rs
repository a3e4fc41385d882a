//! Footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer-social">
                <li>
                    <a
                        href="https://github.com/johndoe"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                    >
                        <i class="fab fa-github"></i>
                    </a>
                </li>
                <li>
                    <a
                        href="https://www.linkedin.com/in/johndoe"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                    >
                        <i class="fab fa-linkedin"></i>
                    </a>
                </li>
                <li>
                    <a href="mailto:john.doe@example.com" aria-label="Email">
                        <i class="fas fa-envelope"></i>
                    </a>
                </li>
            </ul>
            <p class="footer-note">"© 2025 John Doe. Built with Rust and Leptos."</p>
        </footer>
    }
}
