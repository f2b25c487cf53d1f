//! Light/dark color scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The active UI mode. Exactly one is current at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    /// Used when the platform does not report a preference
    #[default]
    Dark,
}

impl ColorScheme {
    /// Map a switch position (`true` = dark) to a scheme
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Endpoint of the transition progress for this scheme (light 0.0, dark 1.0)
    pub fn progress(self) -> f32 {
        match self {
            ColorScheme::Light => 0.0,
            ColorScheme::Dark => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for scheme names other than `light` / `dark`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color scheme '{0}' (expected light or dark)")]
pub struct UnknownScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}
