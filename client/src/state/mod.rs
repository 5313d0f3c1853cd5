//! Client-side state shared through Leptos context or owned by components.
//!
//! DESIGN
//! ======
//! `theme` is provided once at the app root; `nav` is local to the navbar.

pub mod nav;
pub mod theme;
