//! Drag gesture detection for the widget stack.
//!
//! # Gesture flow
//! 1. **Down**: record the press position, reset tracking. Never consumed,
//!    since the press may still become a tap on a card's content.
//! 2. **Move**: once total travel along the stack axis exceeds
//!    [`DRAG_THRESHOLD`], the drag activates; from then on every event is
//!    consumed so card-level click handlers stay quiet during scrolls.
//! 3. **Up/Cancel**: commit (or abandon) the in-flight scroll delta, report
//!    the release velocity, consume iff a drag was active.
//!
//! # Why the delta is negated
//! Natural scrolling: dragging the finger up moves the content up, which is
//! scrolling further *down* the stack. Positive location = scrolled further
//! down, so pointer deltas enter the scroll state negated.

use stackpose_foundation::{
    Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind, VelocityTracker,
    DRAG_THRESHOLD,
};

use crate::scroll::ScrollState;

/// What a pointer release reported.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReleaseInfo {
    /// Whether the release ended an active drag.
    pub was_dragging: bool,
    /// Release velocity in location units per second (positive = the stack
    /// was being scrolled further down).
    pub velocity: f32,
}

/// Turns raw pointer events into scroll deltas on a [`ScrollState`].
#[derive(Debug)]
pub struct StackGestureDetector {
    scroll: ScrollState,
    tracker: VelocityTracker,
    down_position: Option<Point>,
    last_position: Option<Point>,
    dragging: bool,
}

impl StackGestureDetector {
    pub fn new(scroll: ScrollState) -> Self {
        Self {
            scroll,
            tracker: VelocityTracker::new(),
            down_position: None,
            last_position: None,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Dispatches one pointer event and returns whether it was consumed.
    ///
    /// Release metadata is only available through [`Self::on_up`]; hosts
    /// that need it should match on the event kind themselves.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event.position, event.time_ms),
            PointerEventKind::Move => self.on_move(event.position, event.buttons, event.time_ms),
            PointerEventKind::Up => self.on_up(event.time_ms).was_dragging,
            PointerEventKind::Cancel => self.on_cancel(),
        }
    }

    /// Records the press. Down events are never consumed: it is not yet
    /// known whether this becomes a drag or a tap.
    pub fn on_down(&mut self, position: Point, time_ms: i64) -> bool {
        self.down_position = Some(position);
        self.last_position = Some(position);
        self.dragging = false;
        self.tracker.reset();
        self.tracker.add_sample(time_ms, position.y);
        false
    }

    /// Applies pointer movement. Returns `true` while a drag is active.
    pub fn on_move(&mut self, position: Point, buttons: PointerButtons, time_ms: i64) -> bool {
        // Safety: a missed Up (event delivered to another target) leaves us
        // tracking with no button held. Reset instead of scrolling forever.
        if !buttons.contains(PointerButton::Primary) && self.down_position.is_some() {
            log::debug!("stack gesture: missed Up detected, resetting drag state");
            if self.dragging {
                self.scroll.end_gesture();
            }
            self.reset_tracking();
            return false;
        }

        let (Some(down), Some(last)) = (self.down_position, self.last_position) else {
            return false;
        };

        let total_delta = position.y - down.y;
        let incremental_delta = position.y - last.y;

        if !self.dragging && total_delta.abs() > DRAG_THRESHOLD {
            self.dragging = true;
            self.scroll.begin_gesture();
            log::debug!("stack gesture: drag threshold crossed ({total_delta} px)");
        }

        self.last_position = Some(position);
        self.tracker.add_sample(time_ms, position.y);

        if self.dragging {
            self.scroll.dispatch_raw_delta(-incremental_delta);
            true
        } else {
            false
        }
    }

    /// Finishes the gesture, committing the in-flight scroll delta.
    pub fn on_up(&mut self, time_ms: i64) -> ReleaseInfo {
        let was_dragging = self.dragging;
        let velocity = if was_dragging {
            if let Some(last) = self.last_position {
                self.tracker.add_sample(time_ms, last.y);
            }
            -self.tracker.velocity()
        } else {
            0.0
        };

        if was_dragging {
            self.scroll.end_gesture();
        }
        self.reset_tracking();

        ReleaseInfo {
            was_dragging,
            velocity,
        }
    }

    /// Aborts the gesture, discarding the in-flight scroll delta.
    pub fn on_cancel(&mut self) -> bool {
        let was_dragging = self.dragging;
        if was_dragging {
            self.scroll.cancel_gesture();
        }
        self.reset_tracking();
        was_dragging
    }

    fn reset_tracking(&mut self) {
        self.down_position = None;
        self.last_position = None;
        self.dragging = false;
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed() -> PointerButtons {
        PointerButtons::pressed(PointerButton::Primary)
    }

    fn at(y: f32) -> Point {
        Point::new(50.0, y)
    }

    #[test]
    fn sub_threshold_moves_are_not_consumed() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        assert!(!detector.on_move(at(104.0), pressed(), 16));
        assert!(!detector.is_dragging());
        assert_eq!(scroll.location(), 0.0);
    }

    #[test]
    fn crossing_the_threshold_starts_scrolling() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        assert!(detector.on_move(at(88.0), pressed(), 16));
        assert!(detector.is_dragging());
        // Finger moved up 12 px: the stack scrolled down 12.
        assert_eq!(scroll.location(), 12.0);
    }

    #[test]
    fn drag_up_scrolls_down_the_stack() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(200.0), 0);
        detector.on_move(at(180.0), pressed(), 16);
        detector.on_move(at(150.0), pressed(), 32);
        assert_eq!(scroll.location(), 50.0);

        let release = detector.on_up(48);
        assert!(release.was_dragging);
        assert!(release.velocity > 0.0, "upward drag must report positive velocity");
        assert_eq!(scroll.position(), 50.0);
    }

    #[test]
    fn release_after_drag_is_consumed_and_commits() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        detector.on_move(at(60.0), pressed(), 16);
        assert!(detector.on_up(32).was_dragging);
        assert!(!detector.is_dragging());
        assert!(!scroll.gesture_active());
    }

    #[test]
    fn tap_release_reports_no_drag() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        let release = detector.on_up(120);
        assert!(!release.was_dragging);
        assert_eq!(release.velocity, 0.0);
    }

    #[test]
    fn cancel_discards_the_in_flight_delta() {
        let scroll = ScrollState::new(75.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        detector.on_move(at(40.0), pressed(), 16);
        assert_ne!(scroll.location(), 75.0);
        assert!(detector.on_cancel());
        assert_eq!(scroll.location(), 75.0);
    }

    #[test]
    fn missed_up_resets_tracking() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        detector.on_down(at(100.0), 0);
        detector.on_move(at(80.0), pressed(), 16);
        assert!(detector.is_dragging());
        // Buttons gone without an Up: the event went to someone else.
        assert!(!detector.on_move(at(60.0), PointerButtons::NONE, 32));
        assert!(!detector.is_dragging());
        // What was already scrolled stays committed.
        assert_eq!(scroll.position(), 20.0);
        assert!(!scroll.gesture_active());
    }

    #[test]
    fn handle_dispatches_by_event_kind() {
        let scroll = ScrollState::new(0.0);
        let mut detector = StackGestureDetector::new(scroll.clone());

        assert!(!detector.handle(&PointerEvent::new(PointerEventKind::Down, at(100.0), 0)));
        assert!(detector.handle(&PointerEvent::new(PointerEventKind::Move, at(80.0), 16)));
        assert!(detector.handle(&PointerEvent::new(PointerEventKind::Up, at(80.0), 32)));
        assert_eq!(scroll.position(), 20.0);
    }
}
