//! Dusk Theme Screen
//!
//! A single screen with a heading and a circular container holding a switch.
//! Flipping the switch changes the theme, and the background, heading and
//! circle colors animate between the light and dark palettes.
//!
//! # Example
//!
//! ```
//! use dusk_app::prelude::*;
//!
//! let host = FixedHost::new(Some(ColorScheme::Light), ScreenMetrics::new(400.0, 800.0));
//! let mut app = ThemeApp::mount(&host, AppConfig::default()).unwrap();
//! assert!((app.circle_diameter() - 280.0).abs() < 1e-3);
//!
//! app.set_switch(true);
//! while app.frame(16.0) {}
//!
//! let view = app.view();
//! assert_eq!(view.root().color().to_hex_string(), "#1e1e1e");
//! ```
//!
//! Headless scenarios drive the same screen from JSON:
//!
//! ```
//! use dusk_app::{run_scenario, HeadlessRunConfig};
//!
//! let report = run_scenario(
//!     r##"{"initial_scheme": "light", "steps": [
//!         {"type": "toggle", "value": true},
//!         {"type": "settle"},
//!         {"type": "assert_color", "id": "container", "value": "#1e1e1e"}
//!     ]}"##,
//!     HeadlessRunConfig::default(),
//! )
//! .unwrap();
//! assert!(!report.is_failed());
//! assert_eq!(report.final_screen.colors.text, "#f8f8f8");
//! ```

mod app;
mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
mod host;
mod switch;
pub mod view;


pub use app::{AppConfig, ThemeApp};
pub use error::{AppError, Result};
pub use headless_report::{FinalScreen, HeadlessReport, ScenarioVerdict, StepFailure};
pub use headless_runner::{run_loaded_scenario, run_scenario, run_scenario_on};
pub use headless_runtime::{FrameDriver, HeadlessRunConfig};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use host::{FixedHost, HostPlatform, ScreenMetrics, SystemHost};
pub use switch::{SwitchControl, SwitchStyle};
pub use view::{NodeKind, ViewNode, ViewTree};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{AppConfig, ThemeApp};
    pub use crate::error::{AppError, Result};
    pub use crate::host::{FixedHost, HostPlatform, ScreenMetrics, SystemHost};
    pub use crate::view::{NodeKind, ViewNode, ViewTree};

    // Core types
    pub use dusk_animation::{Easing, TimingConfig};
    pub use dusk_core::{Color, Event};
    pub use dusk_theme::{ColorScheme, ThemeState};
}
