//! Pointer input types delivered by the host windowing layer.
//!
//! Stackpose does not own a gesture recognizer: the host forwards raw pointer
//! events (touch or mouse) and applies the consume verdicts reported back by
//! the gesture detector in `stackpose-ui`. Events are plain data; timestamps
//! are supplied by the host in milliseconds so the pipeline stays usable from
//! any frame source.

use crate::geometry::Point;

/// Minimum pointer travel, in logical pixels, before a press is treated as a
/// drag rather than a tap. Shared by every gesture detector so scroll regions
/// and clickable children disambiguate consistently.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// The lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    fn mask(self) -> u8 {
        match self {
            Self::Primary => 1 << 0,
            Self::Secondary => 1 << 1,
            Self::Middle => 1 << 2,
        }
    }
}

/// The set of buttons held down during an event.
///
/// Touch input reports `Primary` while a finger is on the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn pressed(button: PointerButton) -> Self {
        Self(button.mask())
    }

    pub fn with(self, button: PointerButton) -> Self {
        Self(self.0 | button.mask())
    }

    pub fn contains(self, button: PointerButton) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A pointer event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub buttons: PointerButtons,
    /// Host-supplied timestamp in milliseconds. Only deltas matter.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        let buttons = match kind {
            PointerEventKind::Up | PointerEventKind::Cancel => PointerButtons::NONE,
            _ => PointerButtons::pressed(PointerButton::Primary),
        };
        Self {
            kind,
            position,
            buttons,
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_set_semantics() {
        let buttons = PointerButtons::pressed(PointerButton::Primary).with(PointerButton::Middle);
        assert!(buttons.contains(PointerButton::Primary));
        assert!(buttons.contains(PointerButton::Middle));
        assert!(!buttons.contains(PointerButton::Secondary));
        assert!(PointerButtons::NONE.is_empty());
    }

    #[test]
    fn up_events_report_no_buttons() {
        let event = PointerEvent::new(PointerEventKind::Up, Point::ZERO, 0);
        assert!(event.buttons.is_empty());
    }
}
