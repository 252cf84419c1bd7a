//! Configuration loading for namu.
//!
//! A single optional TOML file at `<config dir>/namu/config.toml`. Every
//! field has a default, so an absent file means the default config.

use std::{fs, path::PathBuf};

use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use serde::Deserialize;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Target frames per second for the draw loop.
    pub fps: u32,
    /// Number of snowflakes.
    pub snowflakes: usize,
    /// Animation speed: "slow", "medium" or "fast".
    pub speed: String,
    /// Color theme: "classic", "ember" or "ice".
    pub theme: String,
    /// Caption shown near the bottom of the scene.
    pub caption: String,
    /// Capture mouse clicks as taps.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 30,
            snowflakes: 140,
            speed: "medium".to_string(),
            theme: "classic".to_string(),
            caption: "tap to glow".to_string(),
            mouse: true,
        }
    }
}

impl Config {
    /// Path of the config file, when the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "namu").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("reading {}", path.display()))?;
                Self::parse(&text).wrap_err_with(|| format!("parsing {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config document.
    pub fn parse(text: &str) -> color_eyre::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
