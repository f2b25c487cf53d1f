//! Dusk Animation System
//!
//! Time-based animations for continuously interpolated values.
//!
//! # Features
//!
//! - **Easing**: Standard ease curves plus CSS-style cubic beziers
//! - **Timed values**: Duration-based animations that can be retargeted mid-flight
//! - **Interruptible**: A new target always starts from the in-flight value
//! - **Frame clock**: Wall-clock frame deltas for interactive loops

pub mod clock;
pub mod easing;
pub mod timing;

pub use clock::FrameClock;
pub use easing::Easing;
pub use timing::{TimedValue, TimingConfig};
