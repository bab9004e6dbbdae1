//! UI events
//!
//! The host rendering surface translates its native input into these events
//! and hands them to the mounted screen.

use std::fmt;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Pointer or touch went down on an element
    pub const PRESS_IN: EventType = 1;
    /// Pointer or touch was released (or cancelled) on an element
    pub const PRESS_OUT: EventType = 2;
    /// A completed press: the element's action should run
    pub const PRESS: EventType = 3;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// Identifier of a presentational element within a screen.
///
/// Ids are assigned by the screen when it builds its element tree and are
/// only unique within that screen instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// The id following this one
    pub const fn next(self) -> Self {
        ElementId(self.0 + 1)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A UI event aimed at one element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    pub target: ElementId,
}

impl Event {
    pub fn new(event_type: EventType, target: ElementId) -> Self {
        Self { event_type, target }
    }

    pub fn press_in(target: ElementId) -> Self {
        Self::new(event_types::PRESS_IN, target)
    }

    pub fn press_out(target: ElementId) -> Self {
        Self::new(event_types::PRESS_OUT, target)
    }

    pub fn press(target: ElementId) -> Self {
        Self::new(event_types::PRESS, target)
    }

    /// Whether this event is one of the three press events
    pub fn is_press_family(&self) -> bool {
        matches!(
            self.event_type,
            event_types::PRESS_IN | event_types::PRESS_OUT | event_types::PRESS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_next() {
        assert_eq!(ElementId(4).next(), ElementId(5));
        assert_eq!(ElementId(7).to_string(), "#7");
    }

    #[test]
    fn test_press_constructors() {
        let target = ElementId(3);
        assert_eq!(Event::press_in(target).event_type, event_types::PRESS_IN);
        assert_eq!(Event::press_out(target).event_type, event_types::PRESS_OUT);
        assert_eq!(Event::press(target).event_type, event_types::PRESS);
        assert!(Event::press(target).is_press_family());
        assert!(!Event::new(event_types::MOUNT, target).is_press_family());
    }
}
