use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequential identifier for a drawn line segment.
///
/// Ids are handed out in increasing order and never reused.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SegmentId(pub u64);

impl SegmentId {
    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-drawn line between two world-space points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub id: SegmentId,
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    /// A zero-length segment anchored at `point`.
    pub fn anchored(id: SegmentId, point: Vec3) -> Self {
        Self {
            id,
            start: point,
            end: point,
        }
    }

    pub fn midpoint(&self) -> Vec3 {
        crate::geometry::midpoint(self.start, self.end)
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// The scenes the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    #[default]
    Cube,
    WavePlane,
    LineDrawing,
}

impl SceneKind {
    /// All scenes in menu order.
    pub const ALL: [SceneKind; 3] = [Self::Cube, Self::WavePlane, Self::LineDrawing];

    /// Stable identifier used on the command line and in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::WavePlane => "wave_plane",
            Self::LineDrawing => "line_drawing",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cube => "Rotating Cube",
            Self::WavePlane => "Wave Plane",
            Self::LineDrawing => "Line Drawing",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from parsing a scene identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneParseError {
    #[error("unknown scene {0:?} (expected cube, wave_plane or line_drawing)")]
    Unknown(String),
}

impl FromStr for SceneKind {
    type Err = SceneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| SceneParseError::Unknown(s.to_string()))
    }
}
