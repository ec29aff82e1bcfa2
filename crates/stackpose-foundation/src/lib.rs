//! Foundation elements for Stackpose: geometry, pointer input, and velocity tracking.

pub mod geometry;
pub mod input;
pub mod velocity_tracker;

// Re-export commonly used items
pub use geometry::{Color, Point};
pub use input::{
    PointerButton, PointerButtons, PointerEvent, PointerEventKind, DRAG_THRESHOLD,
};
pub use velocity_tracker::VelocityTracker;

pub mod prelude {
    pub use crate::geometry::{Color, Point};
    pub use crate::input::{
        PointerButton, PointerButtons, PointerEvent, PointerEventKind, DRAG_THRESHOLD,
    };
    pub use crate::velocity_tracker::VelocityTracker;
}
