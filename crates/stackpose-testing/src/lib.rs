//! Robot-style testing harness for Stackpose.
//!
//! A [`StackRobot`] drives a [`WidgetStack`](stackpose_ui::WidgetStack) the
//! way a finger would (timed pointer sequences plus pumped frames) and
//! exposes snapshots of the per-card visuals for assertions. Everything is
//! deterministic: the robot owns a virtual clock, so tests never depend on
//! wall time.

pub mod robot;
pub mod robot_assertions;

pub use robot::{StackRobot, StackSnapshot};

pub mod prelude {
    pub use crate::robot::{StackRobot, StackSnapshot};
    pub use crate::robot_assertions;
}
