#![deny(missing_docs)]

//! High level facade for the Stackpose widget stack.
//!
//! Applications can depend on this single crate: it re-exports the stack
//! model and interaction layer from `stackpose-ui`, the pure layout policy
//! from `stackpose-layout`, and the input primitives from
//! `stackpose-foundation`.

/// Re-export the UI crate so applications can depend on a single crate.
pub use stackpose_ui::*;

/// Settle animation primitives, for hosts that drive their own policies.
pub use stackpose_animation::{Spring, SpringConfig};

/// Input and geometry primitives, for hosts wiring their own event sources.
pub use stackpose_foundation as foundation;

/// The pure layout policy, for hosts that evaluate card visuals directly.
pub use stackpose_layout as layout;

/// Convenience imports for Stackpose applications.
pub mod prelude {
    pub use stackpose_animation::{Spring, SpringConfig};
    pub use stackpose_ui::prelude::*;
}
