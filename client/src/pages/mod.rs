//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes sections from `components`; the site has one route.

pub mod landing;
