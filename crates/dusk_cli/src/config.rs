//! Dusk configuration file handling

use anyhow::{Context, Result};
use dusk_animation::{Easing, TimingConfig};
use dusk_app::{AppConfig, HeadlessRunConfig, ScreenMetrics};
use dusk_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "dusk.toml";

/// Top-level Dusk configuration (dusk.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DuskConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Theme transition settings
#[derive(Debug, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// Curve name (`"ease_in_out_quad"`) or `{ cubic_bezier = [x1, y1, x2, y2] }`
    #[serde(default = "default_easing")]
    pub easing: Easing,
}

fn default_duration_ms() -> u32 {
    300
}

fn default_easing() -> Easing {
    Easing::EaseInOutQuad
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: default_easing(),
        }
    }
}

/// Initial scheme selection
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Used when the system reports no preference
    #[serde(default)]
    pub fallback: ColorScheme,
    /// Skip detection and start in this scheme
    #[serde(default)]
    pub scheme: Option<ColorScheme>,
}

/// Logical screen size
#[derive(Debug, Deserialize, Serialize)]
pub struct ScreenConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    390.0
}

fn default_height() -> f32 {
    844.0
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Scenario runner settings
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlessConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_check_every_frames")]
    pub check_every_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_check_every_frames() -> u32 {
    1
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            check_every_frames: default_check_every_frames(),
        }
    }
}

impl DuskConfig {
    /// Load an explicit config file, or `dusk.toml` from the working
    /// directory when present, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Mount settings, with a command-line scheme taking precedence over the file
    pub fn app_config(&self, scheme_override: Option<ColorScheme>) -> AppConfig {
        AppConfig {
            timing: TimingConfig::new(self.animation.duration_ms, self.animation.easing),
            fallback_scheme: self.theme.fallback,
            scheme_override: scheme_override.or(self.theme.scheme),
            ..AppConfig::default()
        }
    }

    pub fn screen_metrics(&self) -> ScreenMetrics {
        ScreenMetrics::new(self.screen.width, self.screen.height)
    }

    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            width: self.screen.width.max(0.0).round() as u32,
            height: self.screen.height.max(0.0).round() as u32,
            tick_ms: self.headless.tick_ms,
            check_every_frames: self.headless.check_every_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = DuskConfig::from_toml_str("").unwrap();
        assert_eq!(config.animation.duration_ms, 300);
        assert_eq!(config.animation.easing, Easing::EaseInOutQuad);
        assert_eq!(config.theme.fallback, ColorScheme::Dark);
        assert_eq!(config.theme.scheme, None);
        assert_eq!(config.screen.width, 390.0);
        assert_eq!(config.headless.tick_ms, 16);
    }

    #[test]
    fn parses_every_section() {
        let config = DuskConfig::from_toml_str(
            r#"
            [animation]
            duration_ms = 500
            easing = { cubic_bezier = [0.25, 0.1, 0.25, 1.0] }

            [theme]
            fallback = "light"
            scheme = "dark"

            [screen]
            width = 400.0

            [headless]
            tick_ms = 10
            check_every_frames = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.duration_ms, 500);
        assert_eq!(
            config.animation.easing,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0)
        );
        assert_eq!(config.theme.fallback, ColorScheme::Light);
        assert_eq!(config.theme.scheme, Some(ColorScheme::Dark));
        assert_eq!(config.screen.width, 400.0);
        assert_eq!(config.screen.height, 844.0);

        let run = config.run_config();
        assert_eq!((run.width, run.height), (400, 844));
        assert_eq!(run.tick_ms, 10);
        assert_eq!(run.check_every_frames, 3);
    }

    #[test]
    fn named_easing() {
        let config = DuskConfig::from_toml_str("[animation]\neasing = \"linear\"\n").unwrap();
        assert_eq!(config.animation.easing, Easing::Linear);
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert!(DuskConfig::from_toml_str("[theme]\nfallback = \"sepia\"\n").is_err());
    }

    #[test]
    fn command_line_scheme_wins() {
        let config = DuskConfig::from_toml_str("[theme]\nscheme = \"dark\"\n").unwrap();
        assert_eq!(
            config.app_config(Some(ColorScheme::Light)).scheme_override,
            Some(ColorScheme::Light)
        );
        assert_eq!(
            config.app_config(None).scheme_override,
            Some(ColorScheme::Dark)
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = DuskConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn defaults_serialize() {
        let text = DuskConfig::default().to_toml().unwrap();
        assert!(text.contains("duration_ms = 300"));
        assert!(text.contains("easing = \"ease_in_out_quad\""));
        assert!(text.contains("fallback = \"dark\""));
    }
}
