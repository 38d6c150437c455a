//! Light/dark theme preference and its on-page presentation.

use std::collections::HashMap;

use crate::control::ToggleControl;

/// Body class present while the light theme is on.
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored `"light"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Durable key/value slot that survives across sessions.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeSwitch<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = Theme::from_stored(store.get(&key).as_deref());
        Self {
            store,
            key,
            current,
        }
    }

    /// Flips the theme and writes it back to the store.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        log::debug!("theme -> {}", self.current.as_str());
        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// The page elements a theme change touches.
pub struct ThemeView<T> {
    pub body: T,
    /// Shown while light mode is on.
    pub moon_icon: T,
    /// Shown while dark mode is on.
    pub sun_icon: T,
}

impl<T: ToggleControl> ThemeView<T> {
    pub fn apply(&mut self, theme: Theme) {
        let light = theme == Theme::Light;
        self.body.set_class(LIGHT_MODE_CLASS, light);
        self.moon_icon.set_class(HIDDEN_CLASS, !light);
        self.sun_icon.set_class(HIDDEN_CLASS, light);
    }
}
