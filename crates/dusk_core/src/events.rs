//! Input events
//!
//! Platform-agnostic events delivered to interactive elements.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const KEY_DOWN: EventType = 20;
    pub const RESIZE: EventType = 40;
    /// A two-state control reports a new value
    pub const VALUE_CHANGE: EventType = 45;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Element id the event is aimed at
    pub target: String,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer { x: f32, y: f32 },
    Key { key: KeyCode },
    Toggle { value: bool },
    Resize { width: u32, height: u32 },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
}

impl Event {
    fn new(event_type: EventType, target: impl Into<String>, data: EventData) -> Self {
        Self {
            event_type,
            target: target.into(),
            data,
            propagation_stopped: false,
        }
    }

    /// A control changed to `value`
    pub fn value_change(target: impl Into<String>, value: bool) -> Self {
        Self::new(
            event_types::VALUE_CHANGE,
            target,
            EventData::Toggle { value },
        )
    }

    pub fn pointer_down(target: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_DOWN, target, EventData::Pointer { x, y })
    }

    pub fn key_down(target: impl Into<String>, key: KeyCode) -> Self {
        Self::new(event_types::KEY_DOWN, target, EventData::Key { key })
    }

    pub fn resize(target: impl Into<String>, width: u32, height: u32) -> Self {
        Self::new(
            event_types::RESIZE,
            target,
            EventData::Resize { width, height },
        )
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_type_and_data() {
        let event = Event::value_change("theme-switch", true);
        assert_eq!(event.event_type, event_types::VALUE_CHANGE);
        assert_eq!(event.target, "theme-switch");
        assert_eq!(event.data, EventData::Toggle { value: true });
        assert!(!event.propagation_stopped);

        let mut key = Event::key_down("theme-switch", KeyCode::SPACE);
        key.stop_propagation();
        assert!(key.propagation_stopped);
    }
}
