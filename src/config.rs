//! Tunables for every page feature.
//!
//! Defaults reproduce the shipped page. A page may override any subset by
//! embedding a JSON block (`<script type="application/json" id="site-config">`);
//! omitted keys keep their defaults.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub gallery: GalleryConfig,
    pub particles: ParticleConfig,
    pub typing: TypingConfig,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parses a partial override document on top of the defaults.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Cards shown on the home grid regardless of the selected filter.
    pub home_limit: NonZeroUsize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            home_limit: NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    pub count: usize,
    /// Pairs closer than this get a proximity line.
    pub link_distance: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Radii are drawn from `[0, max_radius)`.
    pub max_radius: f64,
    pub rgb: (u8, u8, u8),
    pub fill_alpha: f64,
    pub line_width: f64,
    /// Above this many pair checks per frame the proximity pass gets expensive.
    pub pair_budget_warning: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 60,
            link_distance: 100.0,
            max_speed: 0.25,
            max_radius: 2.0,
            rgb: (99, 102, 241),
            fill_alpha: 0.5,
            line_width: 0.5,
            pair_budget_warning: 5_000,
        }
    }
}

impl ParticleConfig {
    /// Unordered pairs examined by the proximity pass each frame.
    pub fn pair_checks(&self) -> usize {
        self.count * self.count.saturating_sub(1) / 2
    }

    pub fn exceeds_pair_budget(&self) -> bool {
        self.pair_checks() > self.pair_budget_warning
    }

    /// CSS color string for the given alpha.
    pub fn rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    pub roles: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full role on screen before deleting starts.
    pub hold_ms: u32,
    /// Pause on the empty string before the next role starts.
    pub advance_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            roles: ["Generative AI", "Data Analytics", "Python Automation"]
                .into_iter()
                .map(String::from)
                .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            advance_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
        }
    }
}
