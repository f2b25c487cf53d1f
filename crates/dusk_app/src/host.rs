//! Host platform queries
//!
//! The screen reads two things from its host, both once at mount: the
//! preferred color scheme and the display size.

use crate::error::{AppError, Result};
use dusk_theme::{detect_system_color_scheme, ColorScheme};

/// Logical display size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl ScreenMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return Err(AppError::InvalidScreen(format!(
                "{}x{} (dimensions must be positive)",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for ScreenMetrics {
    /// A typical phone in portrait
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// What the screen asks of the environment it runs in
pub trait HostPlatform {
    /// Preferred scheme, or `None` when the host has no preference
    fn color_scheme(&self) -> Option<ColorScheme>;

    fn screen_metrics(&self) -> ScreenMetrics;
}

/// Host backed by the real OS preference and configured metrics
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost {
    metrics: ScreenMetrics,
}

impl SystemHost {
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self { metrics }
    }
}

impl HostPlatform for SystemHost {
    fn color_scheme(&self) -> Option<ColorScheme> {
        detect_system_color_scheme()
    }

    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }
}

/// Deterministic host for tests and headless runs
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedHost {
    pub scheme: Option<ColorScheme>,
    pub metrics: ScreenMetrics,
}

impl FixedHost {
    pub fn new(scheme: Option<ColorScheme>, metrics: ScreenMetrics) -> Self {
        Self { scheme, metrics }
    }
}

impl HostPlatform for FixedHost {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }
}
