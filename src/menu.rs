//! Slide-in navigation panel for narrow screens.

use crate::control::ToggleControl;

/// Keeps the panel off-screen while closed.
pub const CLOSED_CLASS: &str = "translate-x-full";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Markup for the menu button: a cross while open, bars while closed.
    pub fn button_markup(&self) -> &'static str {
        if self.open {
            r#"<i class="fa-solid fa-xmark"></i>"#
        } else {
            r#"<i class="fa-solid fa-bars"></i>"#
        }
    }

    pub fn apply<T: ToggleControl>(&self, panel: &mut T) {
        panel.set_class(CLOSED_CLASS, !self.open);
    }
}
