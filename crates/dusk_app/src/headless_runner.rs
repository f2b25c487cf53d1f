//! Scenario runner that drives the theme screen headlessly.

use crate::app::{AppConfig, ThemeApp};
use crate::headless_assert::{
    evaluate_assert_color, evaluate_assert_exists, evaluate_assert_settled,
    evaluate_assert_switch, evaluate_assert_text_contains, evaluate_assert_theme,
    evaluate_colors_in_range, AssertionResult,
};
use crate::headless_report::{HeadlessReport, ScenarioVerdict, StepFailure};
use crate::headless_runtime::{FrameDriver, HeadlessRunConfig};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::host::FixedHost;
use anyhow::Result;
use dusk_core::Color;
use std::ops::ControlFlow;

/// A named failed check
type Failure = (&'static str, AssertionResult);

/// Execute scenario JSON against a freshly mounted screen.
pub fn run_scenario(input: &str, runtime_cfg: HeadlessRunConfig) -> Result<HeadlessReport> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, AppConfig::default(), runtime_cfg)
}

/// Mount a screen on a fixed host built from the scenario and run it.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    app_config: AppConfig,
    runtime_cfg: HeadlessRunConfig,
) -> Result<HeadlessReport> {
    let host = FixedHost::new(scenario.initial_scheme, runtime_cfg.screen_metrics());
    let mut app = ThemeApp::mount(&host, app_config)?;
    run_scenario_on(&mut app, scenario, runtime_cfg)
}

/// Execute a scenario against an already mounted screen.
pub fn run_scenario_on(
    app: &mut ThemeApp,
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
) -> Result<HeadlessReport> {
    let mut driver = FrameDriver::new(&runtime_cfg)?;
    let check_range = scenario.check_range;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let failure: Option<Failure> = match step {
            ScenarioStep::Wait { ms } => {
                let frames = runtime_cfg.frames_for(*ms);
                run_frames(app, &mut driver, frames, check_range, false)
            }
            ScenarioStep::Tick { frames } => {
                run_frames(app, &mut driver, *frames, check_range, false)
            }
            ScenarioStep::Toggle { value } => {
                match value {
                    Some(on) => app.set_switch(*on),
                    None => app.toggle(),
                };
                None
            }
            ScenarioStep::Settle { max_ms } => {
                let failure = if app.theme().is_animating() {
                    let frames = runtime_cfg.frames_for(*max_ms);
                    run_frames(app, &mut driver, frames, check_range, true)
                } else {
                    None
                };
                failure.or_else(|| {
                    app.theme().is_animating().then(|| {
                        (
                            "settle",
                            AssertionResult::Failed {
                                code: "settle_timeout".to_string(),
                                message: format!(
                                    "transition still running after {max_ms}ms (progress {:.3})",
                                    app.theme().progress()
                                ),
                            },
                        )
                    })
                })
            }
            ScenarioStep::AssertExists { id } => Some((
                "assert_exists",
                evaluate_assert_exists(id, &app.snapshot()),
            )),
            ScenarioStep::AssertTextContains { id, value } => Some((
                "assert_text_contains",
                evaluate_assert_text_contains(id, value, &app.snapshot()),
            )),
            ScenarioStep::AssertTheme { scheme } => Some((
                "assert_theme",
                evaluate_assert_theme(*scheme, &app.snapshot()),
            )),
            ScenarioStep::AssertSwitch { value } => Some((
                "assert_switch",
                evaluate_assert_switch(*value, &app.snapshot()),
            )),
            ScenarioStep::AssertColor { id, value } => {
                let expected = Color::parse_hex(value)?;
                Some((
                    "assert_color",
                    evaluate_assert_color(id, expected, &app.snapshot()),
                ))
            }
            ScenarioStep::AssertSettled => {
                Some(("assert_settled", evaluate_assert_settled(&app.snapshot())))
            }
        };

        if let Some((assertion, AssertionResult::Failed { code, message })) = failure {
            tracing::debug!("scenario step {step_index} failed: {message}");
            let verdict = ScenarioVerdict::Failed(StepFailure {
                step_index,
                assertion: assertion.to_string(),
                code,
                message,
            });
            return Ok(HeadlessReport::new(
                verdict,
                driver.frames(),
                driver.elapsed_ms(),
                app,
            ));
        }
    }

    Ok(HeadlessReport::new(
        ScenarioVerdict::Passed,
        driver.frames(),
        driver.elapsed_ms(),
        app,
    ))
}

/// Run up to `frames` frames, range-checking due frames.
/// With `until_settled`, stops at the first frame that finishes the transition.
fn run_frames(
    app: &mut ThemeApp,
    driver: &mut FrameDriver,
    frames: u32,
    check_range: bool,
    until_settled: bool,
) -> Option<Failure> {
    driver
        .run(app, frames, |app, step| {
            if check_range && step.check {
                let result = evaluate_colors_in_range(&app.snapshot());
                if matches!(result, AssertionResult::Failed { .. }) {
                    return ControlFlow::Break(Some(("color_range", result)));
                }
            }
            if until_settled && !step.animating {
                return ControlFlow::Break(None);
            }
            ControlFlow::Continue(())
        })
        .flatten()
}
