//! Style derivations
//!
//! Pure functions from transition progress (0.0 = light, 1.0 = dark) to the
//! colors drawn for each role. Called once per frame with the in-flight
//! progress; nothing here holds state.

use crate::palette::{ColorRole, Palette};
use dusk_core::Color;

/// Colors for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeStyles {
    pub background: Color,
    pub text: Color,
    pub circle: Color,
}

impl ThemeStyles {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Circle => self.circle,
            ColorRole::Text => self.text,
        }
    }
}

impl From<Palette> for ThemeStyles {
    fn from(palette: Palette) -> Self {
        Self {
            background: palette.background,
            text: palette.text,
            circle: palette.circle,
        }
    }
}

/// Interpolate one role between the light and dark palettes
pub fn role_color(role: ColorRole, progress: f32) -> Color {
    Palette::light()
        .get(role)
        .lerp(Palette::dark().get(role), progress)
}

pub fn background_color(progress: f32) -> Color {
    role_color(ColorRole::Background, progress)
}

pub fn text_color(progress: f32) -> Color {
    role_color(ColorRole::Text, progress)
}

pub fn circle_color(progress: f32) -> Color {
    role_color(ColorRole::Circle, progress)
}

/// All three derivations for `progress`
pub fn derive_styles(progress: f32) -> ThemeStyles {
    ThemeStyles {
        background: background_color(progress),
        text: text_color(progress),
        circle: circle_color(progress),
    }
}

/// Whether `color` lies channel-wise between the light and dark colors of `role`
pub fn within_role_range(role: ColorRole, color: Color) -> bool {
    let light = Palette::light().get(role).to_array();
    let dark = Palette::dark().get(role).to_array();
    color
        .to_array()
        .iter()
        .zip(light.iter().zip(dark.iter()))
        .all(|(c, (l, d))| *c >= l.min(*d) && *c <= l.max(*d))
}
