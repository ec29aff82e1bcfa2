//! Scroll position model for the widget stack.
//!
//! The location is a single scalar: **positive means scrolled further down
//! the stack**, zero is the resting top. It combines a committed `position`
//! with an in-flight `gesture_delta` that only folds into the position when
//! the gesture ends, so a cancelled drag leaves the committed position
//! untouched.
//!
//! The state is a cloneable handle over `Rc<RefCell<_>>`: one writer (the
//! gesture detector or the settle animation) and any number of readers per
//! frame, all on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCROLL_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Default)]
struct ScrollInner {
    position: f32,
    gesture_delta: f32,
    gesture_active: bool,
}

/// Shared scroll position handle.
#[derive(Clone, Debug)]
pub struct ScrollState {
    inner: Rc<RefCell<ScrollInner>>,
    id: u64,
}

impl ScrollState {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScrollInner {
                position: initial,
                gesture_delta: 0.0,
                gesture_active: false,
            })),
            id: NEXT_SCROLL_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Stable identity of this scroll region. Clones share the id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The effective location: committed position plus in-flight delta.
    pub fn location(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.position + inner.gesture_delta
    }

    /// The committed position, excluding any in-flight gesture.
    pub fn position(&self) -> f32 {
        self.inner.borrow().position
    }

    pub fn gesture_active(&self) -> bool {
        self.inner.borrow().gesture_active
    }

    /// Marks the start of a drag. The in-flight delta restarts at zero.
    pub fn begin_gesture(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.gesture_active = true;
        inner.gesture_delta = 0.0;
        log::trace!("scroll {}: gesture began at {}", self.id, inner.position);
    }

    /// Applies a raw scroll delta and returns the amount consumed.
    ///
    /// During a gesture the delta accumulates into the in-flight offset;
    /// outside of one it adjusts the committed position directly (the path
    /// animations use). The location is intentionally unbounded here: range
    /// policy belongs to the release/settle layer.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let mut inner = self.inner.borrow_mut();
        if inner.gesture_active {
            inner.gesture_delta += delta;
        } else {
            inner.position += delta;
        }
        delta
    }

    /// Commits the in-flight delta and returns the new location.
    pub fn end_gesture(&self) -> f32 {
        let mut inner = self.inner.borrow_mut();
        inner.position += inner.gesture_delta;
        inner.gesture_delta = 0.0;
        inner.gesture_active = false;
        log::trace!("scroll {}: gesture ended at {}", self.id, inner.position);
        inner.position
    }

    /// Abandons the in-flight delta without committing it.
    pub fn cancel_gesture(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.gesture_delta = 0.0;
        inner.gesture_active = false;
    }

    /// Overwrites the committed position. Used by settle animations.
    pub fn set_position(&self, position: f32) {
        self.inner.borrow_mut().position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_combines_position_and_gesture_delta() {
        let scroll = ScrollState::new(100.0);
        scroll.begin_gesture();
        scroll.dispatch_raw_delta(25.0);
        assert_eq!(scroll.location(), 125.0);
        assert_eq!(scroll.position(), 100.0);
    }

    #[test]
    fn end_gesture_commits_the_delta() {
        let scroll = ScrollState::new(10.0);
        scroll.begin_gesture();
        scroll.dispatch_raw_delta(-4.0);
        scroll.dispatch_raw_delta(-6.0);
        assert_eq!(scroll.end_gesture(), 0.0);
        assert_eq!(scroll.location(), 0.0);
        assert!(!scroll.gesture_active());
    }

    #[test]
    fn cancel_gesture_discards_the_delta() {
        let scroll = ScrollState::new(50.0);
        scroll.begin_gesture();
        scroll.dispatch_raw_delta(30.0);
        scroll.cancel_gesture();
        assert_eq!(scroll.location(), 50.0);
    }

    #[test]
    fn deltas_outside_a_gesture_move_the_position() {
        let scroll = ScrollState::new(0.0);
        scroll.dispatch_raw_delta(12.0);
        assert_eq!(scroll.position(), 12.0);
    }

    #[test]
    fn clones_share_state_but_keep_one_id() {
        let scroll = ScrollState::new(0.0);
        let other = scroll.clone();
        other.set_position(33.0);
        assert_eq!(scroll.location(), 33.0);
        assert_eq!(scroll.id(), other.id());
        assert_ne!(scroll.id(), ScrollState::new(0.0).id());
    }
}
