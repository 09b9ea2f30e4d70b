//! Pointer input: button/position events and surface-to-NDC mapping.
//!
//! # Invariants
//! - Consumers see pointer events, never raw windowing events.
//! - NDC lies in [-1, 1] on both axes for points inside the surface, Y up.

pub mod pointer;

pub use pointer::{PointerButton, PointerEvent, SurfaceRect};
