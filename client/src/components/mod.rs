//! Presentational sections of the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static content from `content` and read the theme from
//! the `ThemeContext` provided by `App`.

pub mod about;
pub mod features_grid;
pub mod final_cta;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod join_link;
pub mod logo;
pub mod navbar;
pub mod theme_toggle;
pub mod value_proposition;
