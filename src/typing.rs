//! Hero-text typewriter that cycles through the configured roles.

use crate::config::TypingConfig;
use crate::error::{Result, SiteError};
use crate::schedule::{Cadence, Scheduled};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingCycler {
    config: TypingConfig,
    role: usize,
    chars: usize,
    deleting: bool,
    text: String,
}

impl TypingCycler {
    pub fn new(config: TypingConfig) -> Result<Self> {
        if config.roles.is_empty() {
            return Err(SiteError::NoRoles);
        }
        Ok(Self {
            config,
            role: 0,
            chars: 0,
            deleting: false,
            text: String::new(),
        })
    }

    /// Types or deletes one character and returns what to show and how long
    /// to wait before the next step.
    pub fn step(&mut self) -> TypingStep {
        let role = &self.config.roles[self.role];
        let role_len = role.chars().count();

        // Deleting from an empty role (or typing an empty one) has nothing to
        // remove; clamp so the count never underflows.
        self.chars = if self.deleting {
            self.chars.saturating_sub(1)
        } else {
            (self.chars + 1).min(role_len)
        };
        self.text = role.chars().take(self.chars).collect();

        let mut delay_ms = if self.deleting {
            self.config.delete_ms
        } else {
            self.config.type_ms
        };
        if !self.deleting && self.chars == role_len {
            delay_ms = self.config.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.config.roles.len();
            delay_ms = self.config.advance_ms;
        }

        TypingStep {
            text: self.text.clone(),
            delay_ms,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

/// The cycler bound to the element that shows its text.
pub struct Typewriter<F> {
    pub cycler: TypingCycler,
    pub show: F,
}

impl<F: FnMut(&str)> Scheduled for Typewriter<F> {
    fn tick(&mut self) -> Cadence {
        let step = self.cycler.step();
        (self.show)(&step.text);
        Cadence::After(step.delay_ms)
    }
}
