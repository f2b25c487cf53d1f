//! Scenario definition for headless theme-screen runs.

use crate::error::AppError;
use anyhow::Result;
use dusk_core::Color;
use dusk_theme::ColorScheme;
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless steps, optionally pinning the platform scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    /// Scheme the fake host reports at mount (`None` = no preference)
    #[serde(default)]
    pub initial_scheme: Option<ColorScheme>,
    /// Check every sampled frame stays inside the palette range
    #[serde(default = "default_true")]
    pub check_range: bool,
    pub steps: Vec<ScenarioStep>,
}

fn default_true() -> bool {
    true
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(input)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Reject steps that can never pass
    fn validate(&self) -> std::result::Result<(), AppError> {
        for (index, step) in self.steps.iter().enumerate() {
            if let ScenarioStep::AssertColor { value, .. } = step {
                Color::parse_hex(value)
                    .map_err(|err| AppError::Scenario(format!("step {index}: {err}")))?;
            }
        }
        Ok(())
    }
}

/// Scenario step set.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wait {
        ms: u64,
    },
    Tick {
        frames: u32,
    },
    /// Operate the switch; without a value it flips
    Toggle {
        #[serde(default)]
        value: Option<bool>,
    },
    /// Run frames until the transition finishes
    Settle {
        #[serde(default = "default_settle_ms")]
        max_ms: u64,
    },
    AssertExists {
        id: String,
    },
    AssertTextContains {
        id: String,
        value: String,
    },
    AssertTheme {
        scheme: ColorScheme,
    },
    AssertSwitch {
        value: bool,
    },
    /// Compare an element's color as `#rrggbb`
    AssertColor {
        id: String,
        value: String,
    },
    AssertSettled,
}

fn default_settle_ms() -> u64 {
    2_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        let scenario = HeadlessScenario::from_json(
            r##"{
                "initial_scheme": "light",
                "steps": [
                    {"type": "toggle", "value": true},
                    {"type": "toggle"},
                    {"type": "wait", "ms": 100},
                    {"type": "settle"},
                    {"type": "assert_theme", "scheme": "dark"},
                    {"type": "assert_color", "id": "container", "value": "#1e1e1e"},
                    {"type": "assert_settled"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(scenario.initial_scheme, Some(ColorScheme::Light));
        assert!(scenario.check_range);
        assert_eq!(scenario.steps.len(), 7);
        assert!(matches!(
            scenario.steps[1],
            ScenarioStep::Toggle { value: None }
        ));
        assert!(matches!(
            scenario.steps[3],
            ScenarioStep::Settle { max_ms: 2_000 }
        ));
    }

    #[test]
    fn rejects_bad_color_literal() {
        let err = HeadlessScenario::from_json(
            r#"{"steps": [{"type": "assert_color", "id": "container", "value": "black"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("step 0"));
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(HeadlessScenario::from_json(r#"{"steps": [{"type": "explode"}]}"#).is_err());
    }
}
