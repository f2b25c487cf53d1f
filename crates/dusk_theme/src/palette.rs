//! Fixed per-scheme palettes

use dusk_core::Color;

/// Semantic color roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Background,
    Circle,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 3] = [ColorRole::Background, ColorRole::Circle, ColorRole::Text];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Circle => "circle",
            ColorRole::Text => "text",
        }
    }
}

/// The three colors of one scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub circle: Color,
    pub text: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xF8F8F8),
            circle: Color::from_hex(0xFFFFFF),
            text: Color::from_hex(0x1E1E1E),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x1E1E1E),
            circle: Color::from_hex(0x252525),
            text: Color::from_hex(0xF8F8F8),
        }
    }

    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Circle => self.circle,
            ColorRole::Text => self.text,
        }
    }
}
