//! Class-flag capability shared by buttons, icons, panels and the page body.

use std::collections::BTreeSet;

/// Anything that can have a CSS class switched on or off.
pub trait ToggleControl {
    fn set_class(&mut self, class: &str, on: bool);
    fn has_class(&self, class: &str) -> bool;
}

/// In-memory stand-in for an element's class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(classes: &[&str]) -> Self {
        Self(classes.iter().map(|c| c.to_string()).collect())
    }
}

impl ToggleControl for ClassSet {
    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.0.insert(class.to_string());
        } else {
            self.0.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.contains(class)
    }
}
