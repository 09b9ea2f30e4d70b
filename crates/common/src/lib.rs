//! Shared types and geometry for the scene switcher.
//!
//! # Invariants
//! - Segment ids are sequential and never reused.
//! - Ray directions and plane normals are unit length.

pub mod geometry;
pub mod types;

pub use geometry::{Plane, Ray, RayCamera, midpoint};
pub use types::{LineSegment, SceneKind, SceneParseError, SegmentId};
