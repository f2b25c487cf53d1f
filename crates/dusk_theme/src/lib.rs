//! Dusk Theme System
//!
//! Light/dark theming with animated transitions.
//!
//! # Overview
//!
//! - **Schemes**: [`ColorScheme`] is either light or dark, nothing else
//! - **Palettes**: one fixed [`Palette`] per scheme (background, circle, text)
//! - **Style derivation**: pure per-frame interpolation between the palettes
//! - **Detection**: one-shot query of the system light/dark preference
//! - **State**: [`ThemeState`] owns the scheme and its animated progress
//!
//! # Quick Start
//!
//! ```rust
//! use dusk_theme::{ColorScheme, ThemeState};
//!
//! let mut theme = ThemeState::with_scheme(ColorScheme::Light);
//! theme.set_dark(true);
//!
//! // Drive frames until the transition settles
//! while theme.tick(16.0) {
//!     let _colors = theme.styles();
//! }
//!
//! assert_eq!(theme.styles().background.to_hex_string(), "#1e1e1e");
//! ```

pub mod palette;
pub mod platform;
pub mod scheme;
pub mod state;
pub mod style;

pub use palette::{ColorRole, Palette};
pub use platform::detect_system_color_scheme;
pub use scheme::{ColorScheme, UnknownScheme};
pub use state::{ListenerId, ThemeState};
pub use style::{derive_styles, within_role_range, ThemeStyles};
