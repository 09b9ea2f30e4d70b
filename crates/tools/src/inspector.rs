use sceneswitch_common::SegmentId;
use sceneswitch_drawing::LineDrawing;

/// Drawing inspector for the UI overlay and the CLI.
pub struct DrawingInspector;

impl DrawingInspector {
    pub fn summary(drawing: &LineDrawing) -> DrawingSummary {
        DrawingSummary {
            segment_count: drawing.segments().len(),
            active: drawing.drag().map(|d| d.segment),
            next_id: drawing.next_id(),
            max_segments: drawing.config().max_segments,
        }
    }

    pub fn inspect_segment(drawing: &LineDrawing, id: SegmentId) -> Option<SegmentInfo> {
        drawing.segment(id).map(|s| SegmentInfo {
            id,
            start: s.start.to_array(),
            end: s.end.to_array(),
            midpoint: s.midpoint().to_array(),
            length: s.length(),
        })
    }

    /// All segments, in drawing order.
    pub fn list_segments(drawing: &LineDrawing) -> Vec<SegmentInfo> {
        drawing
            .segments()
            .iter()
            .filter_map(|s| Self::inspect_segment(drawing, s.id))
            .collect()
    }
}

/// Summary of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSummary {
    pub segment_count: usize,
    /// Segment being dragged, if any.
    pub active: Option<SegmentId>,
    pub next_id: SegmentId,
    pub max_segments: Option<usize>,
}

impl std::fmt::Display for DrawingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Drawing: segments={}", self.segment_count)?;
        if let Some(max) = self.max_segments {
            write!(f, "/{max}")?;
        }
        match self.active {
            Some(id) => write!(f, " dragging={id}")?,
            None => write!(f, " idle")?,
        }
        write!(f, " next={}", self.next_id)
    }
}

/// Detailed info about a single segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentInfo {
    pub id: SegmentId,
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub midpoint: [f32; 3],
    pub length: f32,
}

impl std::fmt::Display for SegmentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment [{}] ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2}) len={:.2}",
            self.id,
            self.start[0],
            self.start[1],
            self.start[2],
            self.end[0],
            self.end[1],
            self.end[2],
            self.length,
        )
    }
}
