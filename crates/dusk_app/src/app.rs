//! The theme screen
//!
//! [`ThemeApp`] owns the theme state exclusively; everything that changes it
//! goes through [`ThemeApp::dispatch`] on the frame loop's thread.

use crate::error::{AppError, Result};
use crate::headless_assert::{DiagnosticsElement, DiagnosticsSnapshot};
use crate::host::HostPlatform;
use crate::switch::SwitchControl;
use crate::view::{ViewTree, SWITCH_ID};
use dusk_animation::TimingConfig;
use dusk_core::events::event_types;
use dusk_core::Event;
use dusk_theme::{derive_styles, ColorScheme, ThemeState};

/// Mount-time settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    /// Transition duration and curve
    pub timing: TimingConfig,
    /// Scheme used when the host reports none
    pub fallback_scheme: ColorScheme,
    /// Forces the initial scheme instead of asking the host
    pub scheme_override: Option<ColorScheme>,
    /// Circle diameter as a fraction of screen width
    pub circle_ratio: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            fallback_scheme: ColorScheme::Dark,
            scheme_override: None,
            circle_ratio: 0.7,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.timing.easing.is_monotonic() {
            return Err(AppError::InvalidConfig(format!(
                "easing {:?} overshoots; theme transitions need a monotonic curve",
                self.timing.easing
            )));
        }
        if !(self.circle_ratio > 0.0 && self.circle_ratio <= 1.0) {
            return Err(AppError::InvalidConfig(format!(
                "circle_ratio must be in (0, 1], got {}",
                self.circle_ratio
            )));
        }
        Ok(())
    }
}

/// Single-screen theme switch demo
#[derive(Debug)]
pub struct ThemeApp {
    theme: ThemeState,
    switch: SwitchControl,
    circle_diameter: f32,
    frame: u64,
    elapsed_ms: f64,
}

impl ThemeApp {
    /// Query the host once and build the screen
    pub fn mount(host: &dyn HostPlatform, config: AppConfig) -> Result<Self> {
        config.validate()?;

        let screen = host.screen_metrics();
        screen.validate()?;

        let reported = match config.scheme_override {
            Some(scheme) => Some(scheme),
            None => host.color_scheme(),
        };
        tracing::info!(color_scheme = ?reported, "mounting theme screen");

        let theme = ThemeState::new(reported, config.fallback_scheme, config.timing);

        Ok(Self {
            theme,
            switch: SwitchControl::new(SWITCH_ID),
            circle_diameter: screen.width * config.circle_ratio,
            frame: 0,
            elapsed_ms: 0.0,
        })
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Mutable access for registering listeners and clearing dirty flags
    pub fn theme_mut(&mut self) -> &mut ThemeState {
        &mut self.theme
    }

    pub fn scheme(&self) -> ColorScheme {
        self.theme.scheme()
    }

    pub fn switch_value(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn circle_diameter(&self) -> f32 {
        self.circle_diameter
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Route an input event. Returns true if it changed the theme.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        if event.event_type == event_types::RESIZE {
            // metrics are read once at mount
            tracing::trace!("ignoring resize for {}", event.target);
            return false;
        }

        let current = self.theme.is_dark();
        match self.switch.handle(event, current) {
            Some(value) if value != current => {
                self.theme.set_dark(value);
                true
            }
            _ => false,
        }
    }

    /// Set the switch as a user would
    pub fn set_switch(&mut self, on: bool) -> bool {
        self.dispatch(&Event::value_change(SWITCH_ID, on))
    }

    /// Flip the switch
    pub fn toggle(&mut self) -> bool {
        let on = !self.switch_value();
        self.set_switch(on)
    }

    /// Advance one frame. Returns true while the transition needs more frames.
    pub fn frame(&mut self, dt_ms: f32) -> bool {
        self.frame += 1;
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms as f64;
        }
        self.theme.tick(dt_ms)
    }

    /// Run frames of `dt_ms` until the transition settles or `max_frames`
    /// elapse. Returns the number of frames run.
    pub fn settle(&mut self, dt_ms: f32, max_frames: u32) -> u32 {
        let mut frames = 0;
        while self.theme.is_animating() && frames < max_frames {
            self.frame(dt_ms);
            frames += 1;
        }
        frames
    }

    /// View tree for the current frame
    pub fn view(&self) -> ViewTree {
        ViewTree::build(
            &self.theme.styles(),
            &self.switch,
            self.switch_value(),
            self.circle_diameter,
        )
    }

    /// View at an arbitrary transition progress. The switch sits on the
    /// side whose palette the colors are closer to.
    pub fn view_at(&self, progress: f32) -> ViewTree {
        let progress = if progress.is_nan() {
            self.theme.progress()
        } else {
            progress.clamp(0.0, 1.0)
        };
        ViewTree::build(
            &derive_styles(progress),
            &self.switch,
            progress >= 0.5,
            self.circle_diameter,
        )
    }

    /// Observable state for headless assertions
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        let view = self.view();
        let elements = view
            .nodes()
            .into_iter()
            .map(|(node, _)| {
                (
                    node.id.to_string(),
                    DiagnosticsElement {
                        text: node.text().map(str::to_string),
                        color: Some(node.color()),
                        role: node.role(),
                    },
                )
            })
            .collect();

        DiagnosticsSnapshot {
            scheme: Some(self.scheme()),
            switch_value: Some(self.switch_value()),
            progress: self.theme.progress(),
            animating: self.theme.is_animating(),
            elements,
        }
    }
}
