//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a navspy.toml, and if present we load settings from there.
//! These only shape the terminal browser (row size, scrolling feel, logging); the navigation
//! rules themselves are fixed.

use crate::error::Error;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked for in the working directory.
pub const CONFIG_FILE: &str = "navspy.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from navspy.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 20.0)]
    /// Distance units one terminal row stands for.
    pub row_height: f64,
    #[facet(default = 1)]
    /// Rows moved per arrow key press.
    pub scroll_step: usize,
    #[facet(default = 40.0)]
    /// Distance units a smooth scroll covers per frame.
    pub smooth_scroll_step: f64,
    #[facet(default = 16)]
    /// Frame interval while a smooth scroll is in flight.
    pub frame_millis: u64,
    #[facet(default = String::new())]
    /// Log destination; empty disables logging in the TUI.
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            scroll_step: 1,
            smooth_scroll_step: 40.0,
            frame_millis: 16,
            log_file: String::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Option<Self> {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(error = %e, "ignoring invalid configuration");
                None
            }
        }
    }

    /// Checks that the geometry settings describe a usable viewport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `row_height` or `smooth_scroll_step` is not a finite
    /// number above zero.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("row_height", self.row_height),
            ("smooth_scroll_step", self.smooth_scroll_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} {value}: must be a finite number above zero"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    /// Load configuration from `path` if it exists and parses.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        Self::from_toml(&contents)
    }

    #[must_use]
    /// Load configuration from navspy.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE)).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
