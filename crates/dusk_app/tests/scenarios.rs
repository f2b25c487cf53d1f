//! End-to-end headless runs of the theme screen

use dusk_app::{
    run_scenario, run_scenario_on, AppConfig, FixedHost, HeadlessRunConfig, HeadlessScenario,
    ScenarioVerdict, ScreenMetrics, ThemeApp,
};
use dusk_theme::ColorScheme;
use std::path::PathBuf;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("dusk_app=debug,dusk_theme=debug")
        .try_init();
}

fn scenario_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

#[test]
fn bundled_scenarios_pass() {
    init_tracing();
    for name in ["mount_light.json", "switch_to_dark.json", "rapid_toggle.json"] {
        let scenario = HeadlessScenario::from_path(&scenario_file(name)).unwrap();
        let report = dusk_app::run_loaded_scenario(
            &scenario,
            AppConfig::default(),
            HeadlessRunConfig::default(),
        )
        .unwrap();
        assert!(!report.is_failed(), "{name} failed: {:?}", report.failure());
    }
}

#[test]
fn switch_to_dark_reports_final_state() {
    let report = run_scenario(
        r#"{"initial_scheme": "light", "steps": [
            {"type": "toggle", "value": true},
            {"type": "settle"}
        ]}"#,
        HeadlessRunConfig::default(),
    )
    .unwrap();

    assert_eq!(report.verdict, ScenarioVerdict::Passed);
    assert_eq!(report.final_screen.scheme, ColorScheme::Dark);
    assert!(report.final_screen.switch);
    assert!(!report.final_screen.animating);
    assert_eq!(report.final_screen.colors.background, "#1e1e1e");
    // 300ms at 16ms per frame
    assert_eq!(report.frames, 19);
    assert_eq!(report.elapsed_ms, 304);
}

#[test]
fn mid_transition_color_assertion_fails() {
    let report = run_scenario(
        r##"{"initial_scheme": "light", "steps": [
            {"type": "toggle", "value": true},
            {"type": "tick", "frames": 5},
            {"type": "assert_color", "id": "container", "value": "#1e1e1e"}
        ]}"##,
        HeadlessRunConfig::default(),
    )
    .unwrap();

    let failure = report.failure().expect("run should fail");
    assert_eq!(failure.step_index, 2);
    assert_eq!(failure.assertion, "assert_color");
    assert_eq!(report.final_screen.scheme, ColorScheme::Dark);
    assert!(report.final_screen.animating);
}

#[test]
fn settle_timeout_is_reported() {
    let report = run_scenario(
        r#"{"initial_scheme": "light", "steps": [
            {"type": "toggle"},
            {"type": "settle", "max_ms": 32}
        ]}"#,
        HeadlessRunConfig::default(),
    )
    .unwrap();

    let failure = report.failure().expect("run should time out");
    assert_eq!(failure.assertion, "settle");
    assert_eq!(failure.code, "settle_timeout");
    assert_eq!(report.frames, 2);
}

#[test]
fn silent_platform_mounts_dark() {
    let report = run_scenario(
        r##"{"steps": [
            {"type": "assert_theme", "scheme": "dark"},
            {"type": "assert_switch", "value": true},
            {"type": "assert_color", "id": "circle", "value": "#252525"}
        ]}"##,
        HeadlessRunConfig::default(),
    )
    .unwrap();
    assert!(!report.is_failed(), "{:?}", report.failure());
}

#[test]
fn toggle_storm_never_leaves_palette_range() {
    let mut steps = Vec::new();
    for _ in 0..40 {
        steps.push(r#"{"type": "toggle"}"#.to_string());
        steps.push(r#"{"type": "tick", "frames": 2}"#.to_string());
    }
    steps.push(r#"{"type": "settle"}"#.to_string());
    steps.push(r#"{"type": "assert_settled"}"#.to_string());
    steps.push(r#"{"type": "assert_theme", "scheme": "light"}"#.to_string());
    let input = format!(
        r#"{{"initial_scheme": "light", "steps": [{}]}}"#,
        steps.join(",")
    );

    let report = run_scenario(&input, HeadlessRunConfig::default()).unwrap();
    assert!(!report.is_failed(), "{:?}", report.failure());
}

#[test]
fn runs_on_a_prepared_app() {
    let host = FixedHost::new(Some(ColorScheme::Dark), ScreenMetrics::default());
    let mut app = ThemeApp::mount(&host, AppConfig::default()).unwrap();
    app.set_switch(false);

    let scenario = HeadlessScenario::from_json(
        r#"{"steps": [{"type": "settle"}, {"type": "assert_theme", "scheme": "light"}]}"#,
    )
    .unwrap();
    let report = run_scenario_on(&mut app, &scenario, HeadlessRunConfig::default()).unwrap();

    assert!(!report.is_failed());
    assert_eq!(report.final_screen.scheme, ColorScheme::Light);
    assert_eq!(app.scheme(), ColorScheme::Light);
    assert!(!app.theme().is_animating());
}
