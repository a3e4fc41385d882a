//! Scroll-Driven Page Effects
//!
//! Window and observer bindings that run outside any one component:
//! header styling, deferred images, reveal-on-scroll and the mobile
//! viewport height fix.

pub mod header;
pub mod lazy;
pub mod reveal;
pub mod viewport;
