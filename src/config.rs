use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ratatui::style::Color;
use std::path::{Path, PathBuf};

use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Start in dark mode
    pub dark_mode: bool,
    /// Preset used while in light mode
    pub light_theme: String,
    /// Preset used while in dark mode
    pub dark_theme: String,
    /// Accent override as hex (#rrggbb), applied to both modes
    pub accent: Option<String>,
    /// Set to false on terminals without 24-bit colour
    pub true_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Course rows present at startup (at least one)
    pub initial_courses: usize,
    /// Terminals narrower than this get the compact navigation bar
    pub compact_width: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            light_theme: "daylight".to_string(),
            dark_theme: "midnight".to_string(),
            accent: None,
            true_color: true,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial_courses: 1,
            compact_width: 64,
        }
    }
}

impl Config {
    /// Default config location: `<config_dir>/gpacal/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpacal")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Number of course rows to start with
    pub fn initial_courses(&self) -> usize {
        self.calculator.initial_courses.max(1)
    }

    /// Build the light and dark themes, in that order.
    ///
    /// Bad presets and accents are logged here and nowhere else, so callers
    /// resolve once and keep the result.
    pub fn resolve_themes(&self) -> (Theme, Theme) {
        let appearance = &self.appearance;
        let accent = appearance.accent.as_deref().and_then(|accent| {
            parse_hex_color(accent)
                .map_err(|e| tracing::warn!("Ignoring accent '{}': {}", accent, e))
                .ok()
        });

        let light = self.resolve_preset(&appearance.light_theme, Theme::daylight(), accent);
        let dark = self.resolve_preset(&appearance.dark_theme, Theme::midnight(), accent);
        (light, dark)
    }

    fn resolve_preset(&self, preset: &str, fallback: Theme, accent: Option<Color>) -> Theme {
        let mut theme = Theme::from_preset(preset).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset '{}', using built-in", preset);
            fallback
        });

        if let Some(color) = accent {
            theme = theme.with_accent(color);
        }

        if self.appearance.true_color {
            theme
        } else {
            theme.to_256_color()
        }
    }
}
