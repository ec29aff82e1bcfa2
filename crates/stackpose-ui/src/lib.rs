//! Widget stack state and interaction for Stackpose.
//!
//! The crate wires the pure layout policy from `stackpose-layout` to a
//! host event loop: a [`ScrollState`] owns the scroll location, a
//! [`StackGestureDetector`] turns raw pointer events into scroll deltas, and
//! a [`WidgetStack`] evaluates per-card visuals once per frame and settles
//! out-of-range locations with a spring after release.

pub mod gesture;
pub mod item;
pub mod scroll;
pub mod stack;
pub mod theme;

pub use gesture::{ReleaseInfo, StackGestureDetector};
pub use item::StackItem;
pub use scroll::ScrollState;
pub use stack::WidgetStack;
pub use theme::{BlurTint, StackTheme, ThemeRegistry};

// Re-export the building blocks applications typically need alongside.
pub use stackpose_foundation::{
    Color, Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind, DRAG_THRESHOLD,
};
pub use stackpose_layout::{overscroll_translate, CardVisuals, MetricsError, StackLayout, StackMetrics};

pub mod prelude {
    pub use crate::{
        BlurTint, CardVisuals, Color, Point, PointerEvent, PointerEventKind, ScrollState,
        StackItem, StackMetrics, StackTheme, ThemeRegistry, WidgetStack,
    };
}
