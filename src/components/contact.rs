//! Contact Section
//!
//! Direct channels next to the validated form.

use leptos::prelude::*;

use crate::components::ContactForm;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-content">
                <div class="contact-info">
                    <p>
                        "Have a project in mind, a role to fill, or just want to "
                        "say hi? My inbox is open."
                    </p>
                    <ul class="contact-channels">
                        <li>
                            <i class="fas fa-envelope"></i>
                            <a href="mailto:john.doe@example.com">"john.doe@example.com"</a>
                        </li>
                        <li>
                            <i class="fab fa-github"></i>
                            <a
                                href="https://github.com/johndoe"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "github.com/johndoe"
                            </a>
                        </li>
                        <li>
                            <i class="fab fa-linkedin"></i>
                            <a
                                href="https://www.linkedin.com/in/johndoe"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "linkedin.com/in/johndoe"
                            </a>
                        </li>
                    </ul>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
