use glam::Vec2;

/// Mouse button that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button. Reserved for camera orbit.
    Primary,
    /// Right button. Starts a line drag.
    Secondary,
    Middle,
}

/// A pointer event over the render surface.
///
/// Positions are in surface pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, position: Vec2 },
    Move { position: Vec2 },
    Up { button: PointerButton },
}

/// Bounding rectangle of the render surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface anchored at the window origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Map a pixel position to normalized device coordinates.
    ///
    /// The surface's left/right edges map to -1/+1 and its top/bottom edges to
    /// +1/-1 (Y is flipped relative to screen space).
    pub fn to_ndc(&self, position: Vec2) -> Vec2 {
        let x = (position.x - self.left) / self.width * 2.0 - 1.0;
        let y = -((position.y - self.top) / self.height * 2.0 - 1.0);
        tracing::trace!(x, y, "pointer ndc");
        Vec2::new(x, y)
    }

    /// Inverse of [`SurfaceRect::to_ndc`].
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (ndc.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}
