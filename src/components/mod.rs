//! UI Components
//!
//! One page section per file, re-exported flat.

mod about;
mod contact;
mod contact_form;
mod footer;
mod hero;
mod navbar;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
