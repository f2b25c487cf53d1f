//! Dusk Core
//!
//! Foundational primitives shared by the Dusk crates:
//!
//! - **Color**: RGBA colors with hex parsing/formatting and clamped interpolation
//! - **Events**: Input events delivered to interactive elements
//!
//! # Example
//!
//! ```rust
//! use dusk_core::Color;
//!
//! let light = Color::from_hex(0xF8F8F8);
//! let dark = Color::parse_hex("#1e1e1e").unwrap();
//!
//! assert_eq!(light.lerp(dark, 0.0), light);
//! assert_eq!(light.lerp(dark, 1.0), dark);
//! assert_eq!(dark.to_hex_string(), "#1e1e1e");
//! ```

pub mod color;
pub mod events;

pub use color::{Color, ColorParseError};
pub use events::{Event, EventData, EventType, KeyCode};
