//! RGBA colors

use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not start with `#`
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The digit count was not 3, 6 or 8
    #[error("color '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    /// A non-hex character was found
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGBA color with channels in the 0.0..=1.0 range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Build from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16).unwrap_or(0) as u8;
                    *slot = nibble * 17;
                }
                Ok(Self::from_rgba8(channels[0], channels[1], channels[2], 255))
            }
            6 => Ok(Self::from_rgba8(
                byte(&digits[0..2]),
                byte(&digits[2..4]),
                byte(&digits[4..6]),
                255,
            )),
            8 => Ok(Self::from_rgba8(
                byte(&digits[0..2]),
                byte(&digits[2..4]),
                byte(&digits[4..6]),
                byte(&digits[6..8]),
            )),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit channels (rounded, clamped)
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Per-channel linear interpolation toward `other`.
    ///
    /// `t` is clamped to 0.0..=1.0 and each channel stays between the two
    /// endpoint channels, so `t = 0.0` and `t = 1.0` return the endpoints
    /// exactly and the result is monotonic in `t`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

fn lerp_channel(from: f32, to: f32, t: f32) -> f32 {
    // NaN falls through to `from`
    if !(t > 0.0) {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    (from + (to - from) * t).clamp(from.min(to), from.max(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::from_hex(0xFFFFFF));
        assert_eq!(Color::parse_hex("#8f00ff").unwrap(), Color::from_hex(0x8F00FF));
        let translucent = Color::parse_hex("#00000019").unwrap();
        assert_eq!(translucent.to_rgba8(), [0, 0, 0, 0x19]);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            Color::parse_hex("f8f8f8"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#f8f8"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn hex_string_matches_input() {
        for hex in ["#f8f8f8", "#1e1e1e", "#252525", "#ffffff"] {
            assert_eq!(Color::parse_hex(hex).unwrap().to_hex_string(), hex);
        }
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.1).to_hex_string(), "#0000001a");
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::from_hex(0xF8F8F8);
        let b = Color::from_hex(0x1E1E1E);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, f32::NAN), a);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::BLACK.lerp(Color::from_hex(0xFFFFFF), 0.5);
        assert_eq!(mid.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn lerp_is_monotonic_per_channel() {
        let a = Color::from_hex(0xF8F8F8);
        let b = Color::from_hex(0x1E1E1E);
        let mut previous = a;
        for step in 1..=1000 {
            let current = a.lerp(b, step as f32 / 1000.0);
            assert!(current.r <= previous.r);
            assert!(current.g <= previous.g);
            assert!(current.b <= previous.b);
            previous = current;
        }
        assert_eq!(previous, b);
    }
}
