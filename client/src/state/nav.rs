//! Navbar chrome state owned by the navigation bar.
//!
//! Scrolling is delegated to `util::scroll`; this state only tracks whether
//! the collapsible mobile menu is expanded.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// A section was picked from the mobile menu. The menu closes only when
    /// the scroll target existed.
    pub fn section_picked(&mut self, found: bool) {
        if found {
            self.close_menu();
        }
    }
}
