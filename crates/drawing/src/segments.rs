use glam::Vec3;
use sceneswitch_common::{LineSegment, SegmentId};

/// Insertion-ordered collection of drawn segments.
///
/// Owns id allocation: every pushed segment gets the next sequential id.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<LineSegment>,
    next_id: SegmentId,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The id the next pushed segment will receive.
    pub fn next_id(&self) -> SegmentId {
        self.next_id
    }

    /// Append a zero-length segment at `point`. Returns its id.
    pub fn push_anchored(&mut self, point: Vec3) -> SegmentId {
        let id = self.next_id;
        self.next_id = id.next();
        self.segments.push(LineSegment::anchored(id, point));
        id
    }

    /// Move the end point of segment `id`. Returns false if it does not exist.
    pub fn set_end(&mut self, id: SegmentId, end: Vec3) -> bool {
        match self.get_mut(id) {
            Some(segment) => {
                segment.end = end;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: SegmentId) -> Option<&LineSegment> {
        // Ids are pushed in increasing order, so the slice stays sorted by id.
        self.segments
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &self.segments[i])
    }

    fn get_mut(&mut self, id: SegmentId) -> Option<&mut LineSegment> {
        self.segments
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &mut self.segments[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineSegment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[LineSegment] {
        &self.segments
    }
}
