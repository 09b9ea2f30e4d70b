//! Developer Tooling: read-only inspection of the drawing state.
//!
//! # Invariants
//! - Tools never mutate what they inspect.

mod inspector;

pub use inspector::{DrawingInspector, DrawingSummary, SegmentInfo};
