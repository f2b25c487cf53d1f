//! Theme toggle control
//!
//! A two-state switch whose position is `theme == dark`. It keeps no value of
//! its own: the caller passes in the reflected position and gets back the
//! value to write into the theme, if the event was meant for the switch.

use dusk_core::events::event_types;
use dusk_core::{Color, Event, EventData, KeyCode};

/// Switch colors (track tint differs by position, thumb is fixed)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchStyle {
    pub track_on: Color,
    pub track_off: Color,
    pub thumb: Color,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            // magenta tint at 20%
            track_on: Color::rgba(1.0, 0.0, 1.0, 0.2),
            track_off: Color::rgba(0.0, 0.0, 0.0, 0.1),
            thumb: Color::from_hex(0x8F00FF),
        }
    }
}

/// The toggle bound to the theme
#[derive(Clone, Debug)]
pub struct SwitchControl {
    id: String,
    style: SwitchStyle,
}

impl SwitchControl {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: SwitchStyle::default(),
        }
    }

    pub fn style(&self) -> SwitchStyle {
        self.style
    }

    pub fn track_color(&self, value: bool) -> Color {
        if value {
            self.style.track_on
        } else {
            self.style.track_off
        }
    }

    /// Interpret `event` against the reflected position `current`.
    ///
    /// Returns the new value for a value-change event, or the flipped value
    /// for a press (pointer, Space or Enter). Events aimed elsewhere, or
    /// already stopped, return `None`.
    pub fn handle(&self, event: &Event, current: bool) -> Option<bool> {
        if event.target != self.id || event.propagation_stopped {
            return None;
        }

        match (event.event_type, &event.data) {
            (event_types::VALUE_CHANGE, EventData::Toggle { value }) => Some(*value),
            (event_types::POINTER_DOWN, _) => Some(!current),
            (event_types::KEY_DOWN, EventData::Key { key })
                if *key == KeyCode::SPACE || *key == KeyCode::ENTER =>
            {
                Some(!current)
            }
            _ => None,
        }
    }
}
