//! Line Drawing: pointer-driven creation of 3D line segments.
//!
//! # Invariants
//! - At most one drag session exists at a time.
//! - Segments are only appended; a drag moves nothing but its own end point.
//! - Segment ids are strictly increasing and never reused.
//! - A pointer ray that misses its plane changes nothing.

pub mod interaction;
pub mod segments;

pub use interaction::{DragSession, DrawOutcome, DrawingConfig, LineDrawing};
pub use segments::SegmentStore;
