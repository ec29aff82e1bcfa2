//! Pure layout policy for the widget stack.
//!
//! This crate maps a scalar scroll location and an item index to the visual
//! properties a renderer applies to each card. It has no view tree, no state
//! and no clock: evaluation is a total function over real-valued locations,
//! cheap enough to run once per item per frame.

pub mod layout;
pub mod metrics;

pub use layout::{overscroll_translate, CardVisuals, StackLayout};
pub use metrics::{MetricsError, StackMetrics};
