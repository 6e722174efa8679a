use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::is_hex_color;
use crate::error::{CardError, Result};

const CYBER_ICON: &str = "#00f0ff";
const CYBER_TITLE: &str = "#00f0ff";
const CYBER_LABEL: &str = "#c5c8c6";
const CYBER_VALUE: &str = "#ffffff";
const CYBER_RANK_LETTER: &str = "#00f0ff";
const CYBER_RANK_PERCENTAGE: &str = "#ffffff";
const CYBER_RANK_PROGRESS_BAR: &str = "#00f0ff";
const CYBER_RING_BG_BASE: &str = "#00f0ff";

const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("amber", include_str!("../themes/amber.toml")),
    ("cyber", include_str!("../themes/cyber.toml")),
    ("mono", include_str!("../themes/mono.toml")),
];

const WIDTH: f64 = 1100.0;
const HEIGHT: f64 = 600.0;
const RANK_RING_RADIUS: f64 = 100.0;
const RANK_RING_THICKNESS: f64 = 12.0;
const RANK_RING_BG_DARK_LEVEL: u32 = 30;
const RANK_PROGRESS_BAR_THICKNESS: f64 = 8.0;
const LANGUAGE_RING_RADIUS: f64 = 80.0;
const LANGUAGE_RING_THICKNESS: f64 = 20.0;

/// Canvas size, palette and ring geometry for one card layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub colors: Palette,
    #[serde(default)]
    pub rank: RankRingConfig,
    #[serde(default)]
    pub language: LanguageRingConfig,
    /// Text drawn as a barcode under the title. Defaults to the GitHub
    /// profile URL of the snapshot's `name`.
    #[serde(default)]
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_value")]
    pub value: String,
    #[serde(default = "default_rank_letter")]
    pub rank_letter: String,
    #[serde(default = "default_rank_percentage")]
    pub rank_percentage: String,
    #[serde(default = "default_rank_progress_bar")]
    pub rank_progress_bar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRingConfig {
    #[serde(default = "default_rank_ring_radius")]
    pub ring_radius: f64,
    #[serde(default = "default_rank_ring_thickness")]
    pub ring_thickness: f64,
    /// Percentage applied to `ring_bg_base` for the unfilled track.
    #[serde(default = "default_rank_ring_bg_dark_level")]
    pub ring_bg_dark_level: u32,
    #[serde(default = "default_ring_bg_base")]
    pub ring_bg_base: String,
    #[serde(default = "default_rank_progress_bar_thickness")]
    pub progress_bar_thickness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRingConfig {
    #[serde(default = "default_language_ring_radius")]
    pub ring_radius: f64,
    #[serde(default = "default_language_ring_thickness")]
    pub ring_thickness: f64,
}

fn default_width() -> f64 {
    WIDTH
}
fn default_height() -> f64 {
    HEIGHT
}
fn default_icon() -> String {
    CYBER_ICON.to_string()
}
fn default_title() -> String {
    CYBER_TITLE.to_string()
}
fn default_label() -> String {
    CYBER_LABEL.to_string()
}
fn default_value() -> String {
    CYBER_VALUE.to_string()
}
fn default_rank_letter() -> String {
    CYBER_RANK_LETTER.to_string()
}
fn default_rank_percentage() -> String {
    CYBER_RANK_PERCENTAGE.to_string()
}
fn default_rank_progress_bar() -> String {
    CYBER_RANK_PROGRESS_BAR.to_string()
}
fn default_ring_bg_base() -> String {
    CYBER_RING_BG_BASE.to_string()
}
fn default_rank_ring_radius() -> f64 {
    RANK_RING_RADIUS
}
fn default_rank_ring_thickness() -> f64 {
    RANK_RING_THICKNESS
}
fn default_rank_ring_bg_dark_level() -> u32 {
    RANK_RING_BG_DARK_LEVEL
}
fn default_rank_progress_bar_thickness() -> f64 {
    RANK_PROGRESS_BAR_THICKNESS
}
fn default_language_ring_radius() -> f64 {
    LANGUAGE_RING_RADIUS
}
fn default_language_ring_thickness() -> f64 {
    LANGUAGE_RING_THICKNESS
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            icon: default_icon(),
            title: default_title(),
            label: default_label(),
            value: default_value(),
            rank_letter: default_rank_letter(),
            rank_percentage: default_rank_percentage(),
            rank_progress_bar: default_rank_progress_bar(),
        }
    }
}

impl Default for RankRingConfig {
    fn default() -> Self {
        RankRingConfig {
            ring_radius: RANK_RING_RADIUS,
            ring_thickness: RANK_RING_THICKNESS,
            ring_bg_dark_level: RANK_RING_BG_DARK_LEVEL,
            ring_bg_base: default_ring_bg_base(),
            progress_bar_thickness: RANK_PROGRESS_BAR_THICKNESS,
        }
    }
}

impl Default for LanguageRingConfig {
    fn default() -> Self {
        LanguageRingConfig {
            ring_radius: LANGUAGE_RING_RADIUS,
            ring_thickness: LANGUAGE_RING_THICKNESS,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: WIDTH,
            height: HEIGHT,
            colors: Palette::default(),
            rank: RankRingConfig::default(),
            language: LanguageRingConfig::default(),
            profile_url: None,
        }
    }
}

impl RenderConfig {
    pub fn from_builtin(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        let content = BUILTIN_PRESETS
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
            .ok_or_else(|| CardError::UnknownPreset {
                name: name.to_string(),
                available: Self::list_builtins().join(", "),
            })?;
        Self::from_toml(content)
    }

    pub fn list_builtins() -> Vec<&'static str> {
        BUILTIN_PRESETS.iter().map(|(n, _)| *n).collect()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CardError::ConfigParse(format!("TOML: {}", e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CardError::ConfigParse(format!("YAML: {}", e)))
    }

    /// Read a configuration file, trying TOML first and then YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::io(path, e))?;

        match Self::from_toml(&content) {
            Ok(config) => Ok(config),
            Err(toml_err) => Self::from_yaml(&content).map_err(|yaml_err| {
                CardError::ConfigParse(format!(
                    "{} is neither TOML nor YAML ({}; {})",
                    path.display(),
                    toml_err,
                    yaml_err
                ))
            }),
        }
    }

    /// Reject configurations that cannot produce a drawable card.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("width", self.width),
            ("height", self.height),
            ("rank.ring_radius", self.rank.ring_radius),
            ("rank.ring_thickness", self.rank.ring_thickness),
            ("rank.progress_bar_thickness", self.rank.progress_bar_thickness),
            ("language.ring_radius", self.language.ring_radius),
            ("language.ring_thickness", self.language.ring_thickness),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(CardError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        if self.language.ring_thickness >= self.language.ring_radius * 2.0 {
            return Err(CardError::InvalidConfig(
                "language.ring_thickness must be smaller than the ring diameter".to_string(),
            ));
        }

        let colors = [
            ("colors.icon", &self.colors.icon),
            ("colors.title", &self.colors.title),
            ("colors.label", &self.colors.label),
            ("colors.value", &self.colors.value),
            ("colors.rank_letter", &self.colors.rank_letter),
            ("colors.rank_percentage", &self.colors.rank_percentage),
            ("colors.rank_progress_bar", &self.colors.rank_progress_bar),
            ("rank.ring_bg_base", &self.rank.ring_bg_base),
        ];
        for (field, value) in colors {
            if !is_hex_color(value) {
                return Err(CardError::InvalidColor {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
