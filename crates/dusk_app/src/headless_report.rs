//! JSON report of a headless scenario run.
//!
//! A report always carries the screen as it was when the run stopped: the
//! scheme, the switch, the transition progress and the three themed colors.

use crate::app::ThemeApp;
use anyhow::{bail, Context, Result};
use dusk_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// The step that stopped a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step_index: usize,
    /// Step kind that failed (`assert_color`, `settle`, `color_range`, ...)
    pub assertion: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioVerdict {
    Passed,
    Failed(StepFailure),
}

/// Themed colors as `#rrggbb`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedColors {
    pub background: String,
    pub text: String,
    pub circle: String,
}

/// Screen state when the run stopped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScreen {
    pub scheme: ColorScheme,
    pub switch: bool,
    pub progress: f32,
    pub animating: bool,
    pub colors: ThemedColors,
}

impl FinalScreen {
    pub fn capture(app: &ThemeApp) -> Self {
        let theme = app.theme();
        let styles = theme.styles();
        Self {
            scheme: theme.scheme(),
            switch: app.switch_value(),
            progress: theme.progress(),
            animating: theme.is_animating(),
            colors: ThemedColors {
                background: styles.background.to_hex_string(),
                text: styles.text.to_hex_string(),
                circle: styles.circle.to_hex_string(),
            },
        }
    }
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessReport {
    #[serde(flatten)]
    pub verdict: ScenarioVerdict,
    pub frames: u64,
    pub elapsed_ms: u64,
    #[serde(rename = "final")]
    pub final_screen: FinalScreen,
}

impl HeadlessReport {
    pub fn new(verdict: ScenarioVerdict, frames: u64, elapsed_ms: u64, app: &ThemeApp) -> Self {
        Self {
            verdict,
            frames,
            elapsed_ms,
            final_screen: FinalScreen::capture(app),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.verdict, ScenarioVerdict::Failed(_))
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match &self.verdict {
            ScenarioVerdict::Passed => None,
            ScenarioVerdict::Failed(failure) => Some(failure),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scenario report")
    }

    /// Write the report under the working directory. Absolute paths and
    /// `..` components are refused.
    pub fn save(&self, path: &Path) -> Result<()> {
        let escapes = path.is_absolute()
            || path.has_root()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            bail!(
                "report path {} must stay inside the working directory",
                path.display()
            );
        }

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        std::fs::write(path, self.to_json()? + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
