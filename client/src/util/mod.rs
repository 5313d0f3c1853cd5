//! Browser-facing helpers behind small traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys concerns from components so the theme and
//! scroll logic can be exercised with in-memory fakes.

pub mod dark_mode;
pub mod scroll;
