//! Assertion helpers for headless scenario checks.

use dusk_core::Color;
use dusk_theme::{within_role_range, ColorRole, ColorScheme};
use rustc_hash::FxHashMap;

/// Snapshot of app-observable state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub scheme: Option<ColorScheme>,
    pub switch_value: Option<bool>,
    pub progress: f32,
    pub animating: bool,
    pub elements: FxHashMap<String, DiagnosticsElement>,
}

/// Minimal element representation for diagnostics checks.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
    pub color: Option<Color>,
    /// Palette role driving `color`, for range checks
    pub role: Option<ColorRole>,
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

fn missing(id: &str) -> AssertionResult {
    AssertionResult::failed("missing_element", format!("{id}: element not found"))
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        missing(id)
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return missing(id);
    };
    let Some(text) = element.text.as_deref() else {
        return AssertionResult::failed("missing_text", format!("{id}: text not available"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

/// Compare at 8-bit precision, as a display would show it
pub fn evaluate_assert_color(
    id: &str,
    expected: Color,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return missing(id);
    };
    let Some(actual) = element.color else {
        return AssertionResult::failed("missing_color", format!("{id}: color not available"));
    };
    if actual.to_rgba8() == expected.to_rgba8() {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "color_mismatch",
            format!("{id}: expected {expected}, got {actual}"),
        )
    }
}

pub fn evaluate_assert_theme(
    expected: ColorScheme,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    match snapshot.scheme {
        Some(scheme) if scheme == expected => AssertionResult::Passed,
        Some(scheme) => AssertionResult::failed(
            "theme_mismatch",
            format!("expected theme {expected}, got {scheme}"),
        ),
        None => AssertionResult::failed("missing_theme", "theme not available".to_string()),
    }
}

pub fn evaluate_assert_switch(expected: bool, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match snapshot.switch_value {
        Some(value) if value == expected => AssertionResult::Passed,
        Some(value) => AssertionResult::failed(
            "switch_mismatch",
            format!("expected switch {expected}, got {value}"),
        ),
        None => AssertionResult::failed("missing_switch", "switch not available".to_string()),
    }
}

pub fn evaluate_assert_settled(snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.animating {
        AssertionResult::failed(
            "still_animating",
            format!("transition in flight at progress {:.3}", snapshot.progress),
        )
    } else {
        AssertionResult::Passed
    }
}

/// Every role-driven element must sit between its light and dark colors
pub fn evaluate_colors_in_range(snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    let mut ids: Vec<&String> = snapshot.elements.keys().collect();
    ids.sort();

    for id in ids {
        let element = &snapshot.elements[id];
        if let (Some(role), Some(color)) = (element.role, element.color) {
            if !within_role_range(role, color) {
                return AssertionResult::failed(
                    "color_out_of_range",
                    format!(
                        "{id}: {color} outside the {} range at progress {:.3}",
                        role.name(),
                        snapshot.progress
                    ),
                );
            }
        }
    }
    AssertionResult::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(id: &str, element: DiagnosticsElement) -> DiagnosticsSnapshot {
        let mut snapshot = DiagnosticsSnapshot {
            scheme: Some(ColorScheme::Light),
            switch_value: Some(false),
            ..Default::default()
        };
        snapshot.elements.insert(id.to_string(), element);
        snapshot
    }

    #[test]
    fn color_assertion_compares_quantized_channels() {
        let snapshot = snapshot_with(
            "container",
            DiagnosticsElement {
                color: Some(Color::from_hex(0xF8F8F8)),
                role: Some(ColorRole::Background),
                ..Default::default()
            },
        );
        let expected = Color::parse_hex("#f8f8f8").unwrap();
        assert_eq!(
            evaluate_assert_color("container", expected, &snapshot),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_color("container", Color::BLACK, &snapshot),
            AssertionResult::Failed { code, .. } if code == "color_mismatch"
        ));
        assert!(matches!(
            evaluate_assert_color("nope", Color::BLACK, &snapshot),
            AssertionResult::Failed { code, .. } if code == "missing_element"
        ));
    }

    #[test]
    fn range_check_flags_foreign_colors() {
        let snapshot = snapshot_with(
            "container",
            DiagnosticsElement {
                color: Some(Color::rgb(1.0, 0.0, 0.0)),
                role: Some(ColorRole::Background),
                ..Default::default()
            },
        );
        assert!(matches!(
            evaluate_colors_in_range(&snapshot),
            AssertionResult::Failed { code, .. } if code == "color_out_of_range"
        ));
    }

    #[test]
    fn theme_and_switch_assertions() {
        let snapshot = snapshot_with("x", DiagnosticsElement::default());
        assert_eq!(
            evaluate_assert_theme(ColorScheme::Light, &snapshot),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_theme(ColorScheme::Dark, &snapshot),
            AssertionResult::Failed { .. }
        ));
        assert!(matches!(
            evaluate_assert_switch(true, &snapshot),
            AssertionResult::Failed { code, .. } if code == "switch_mismatch"
        ));
        assert_eq!(evaluate_assert_settled(&snapshot), AssertionResult::Passed);
    }
}
