//! System color scheme detection
//!
//! Queried once when the app mounts. `DUSK_COLOR_SCHEME` wins over the
//! desktop preference reported by `dark-light`.

use crate::scheme::ColorScheme;
use dark_light::Mode;

/// Environment variable that overrides the detected scheme (`light` / `dark`)
pub const SCHEME_ENV: &str = "DUSK_COLOR_SCHEME";

/// Detect the system light/dark preference.
///
/// Returns `None` when the host does not report one; callers pick the
/// fallback.
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    let env_value = std::env::var(SCHEME_ENV).ok();
    resolve_color_scheme(env_value.as_deref(), dark_light::detect)
}

/// Pick the override when it parses, otherwise ask the desktop
fn resolve_color_scheme(
    env_value: Option<&str>,
    query: impl FnOnce() -> Mode,
) -> Option<ColorScheme> {
    if let Some(value) = env_value {
        match value.parse::<ColorScheme>() {
            Ok(scheme) => {
                tracing::debug!("{SCHEME_ENV} overrides system color scheme: {scheme}");
                return Some(scheme);
            }
            Err(err) => tracing::warn!("ignoring {SCHEME_ENV}: {err}"),
        }
    }

    let detected = scheme_from_mode(query());
    tracing::debug!("detected system color scheme: {:?}", detected);
    detected
}

fn scheme_from_mode(mode: Mode) -> Option<ColorScheme> {
    match mode {
        Mode::Dark => Some(ColorScheme::Dark),
        Mode::Light => Some(ColorScheme::Light),
        Mode::Default => None,
    }
}
