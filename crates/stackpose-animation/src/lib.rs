//! Animation primitives for Stackpose.
//!
//! The crate owns no clock. Animations are plain state machines stepped with
//! a host-supplied `dt`, which keeps them usable from any frame source: a
//! display-link callback, a winit event loop, or a test that pumps synthetic
//! frames.

pub mod spring;

pub use spring::{Spring, SpringConfig};
