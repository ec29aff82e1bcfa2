//! Synthetic gesture driver for widget stacks.

use stackpose_foundation::{Point, PointerEvent, PointerEventKind};
use stackpose_layout::CardVisuals;
use stackpose_ui::WidgetStack;

/// Milliseconds the virtual clock advances per synthesized move or frame.
const FRAME_MS: i64 = 16;
const FRAME_DT: f32 = 1.0 / 60.0;

/// A frozen view of the stack's render output.
#[derive(Clone, Debug)]
pub struct StackSnapshot {
    cards: Vec<CardVisuals>,
    location: f32,
    stack_translate: f32,
}

impl StackSnapshot {
    pub fn cards(&self) -> &[CardVisuals] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> &CardVisuals {
        &self.cards[index]
    }

    pub fn location(&self) -> f32 {
        self.location
    }

    pub fn stack_translate(&self) -> f32 {
        self.stack_translate
    }
}

/// Drives a [`WidgetStack`] with scripted pointer input and pumped frames.
pub struct StackRobot<T> {
    stack: WidgetStack<T>,
    pointer: Option<Point>,
    clock_ms: i64,
}

impl<T> StackRobot<T> {
    pub fn launch(stack: WidgetStack<T>) -> Self {
        Self {
            stack,
            pointer: None,
            clock_ms: 0,
        }
    }

    /// Direct access to the stack under test.
    pub fn stack(&self) -> &WidgetStack<T> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut WidgetStack<T> {
        &mut self.stack
    }

    pub fn location(&self) -> f32 {
        self.stack.location()
    }

    /// Presses the pointer at `(x, y)`. Returns whether the event was
    /// consumed (presses never are).
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let position = Point::new(x, y);
        self.pointer = Some(position);
        let event = PointerEvent::new(PointerEventKind::Down, position, self.clock_ms);
        self.stack.handle_pointer(&event)
    }

    /// Moves the pressed pointer to `(x, y)` in one step.
    ///
    /// Panics if nothing is pressed: a robot script bug, not a stack bug.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        assert!(self.pointer.is_some(), "move_to without a pressed pointer");
        self.clock_ms += FRAME_MS;
        let position = Point::new(x, y);
        self.pointer = Some(position);
        let event = PointerEvent::new(PointerEventKind::Move, position, self.clock_ms);
        self.stack.handle_pointer(&event)
    }

    /// Drags vertically by `dy` (positive = finger moves down) split over
    /// `steps` move events, one virtual frame apart.
    pub fn drag_by(&mut self, dy: f32, steps: usize) {
        let start = self.pointer.expect("drag_by without a pressed pointer");
        let step = dy / steps as f32;
        for i in 1..=steps {
            self.move_to(start.x, start.y + step * i as f32);
        }
    }

    /// Releases the pointer. Returns whether the release was consumed
    /// (it is, when it ends a drag).
    pub fn release(&mut self) -> bool {
        let position = self.pointer.take().expect("release without a press");
        self.clock_ms += FRAME_MS;
        let event = PointerEvent::new(PointerEventKind::Up, position, self.clock_ms);
        self.stack.handle_pointer(&event)
    }

    /// Cancels the gesture, as the platform does when e.g. a system overlay
    /// steals the pointer.
    pub fn cancel(&mut self) -> bool {
        self.pointer = None;
        self.clock_ms += FRAME_MS;
        let event = PointerEvent::new(PointerEventKind::Cancel, Point::ZERO, self.clock_ms);
        self.stack.handle_pointer(&event)
    }

    /// Pumps exactly `frames` animation frames.
    pub fn pump_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.clock_ms += FRAME_MS;
            self.stack.tick(FRAME_DT);
        }
    }

    /// Pumps frames until no animation is running, up to `max_frames`.
    /// Returns the number of frames pumped.
    ///
    /// Panics if the stack is still animating after `max_frames`; a settle
    /// that never rests is a bug worth failing loudly on.
    pub fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            self.clock_ms += FRAME_MS;
            if !self.stack.tick(FRAME_DT) {
                return frame + 1;
            }
        }
        panic!("stack still animating after {max_frames} frames");
    }

    /// Captures the stack's current render output.
    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot {
            cards: self.stack.frame(),
            location: self.stack.location(),
            stack_translate: self.stack.stack_translate(),
        }
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod robot_tests;
