use glam::{Vec2, Vec3};
use sceneswitch_common::{LineSegment, Plane, RayCamera, SegmentId};
use sceneswitch_input::{PointerButton, PointerEvent, SurfaceRect};

use crate::segments::SegmentStore;

/// Tunables for the drawing interaction.
#[derive(Debug, Clone, Default)]
pub struct DrawingConfig {
    /// Refuse new drags once this many segments exist. `None` is unbounded.
    pub max_segments: Option<usize>,
}

/// The in-progress drag. Exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub segment: SegmentId,
    /// Plane through `origin` facing away from the camera.
    pub plane: Plane,
    pub origin: Vec3,
}

/// What a pointer event did to the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOutcome {
    /// Event does not apply in the current state.
    Ignored,
    /// A new segment was anchored and a drag began.
    Started(SegmentId),
    /// The active segment's end point moved.
    Extended(SegmentId),
    /// The pointer ray did not reach the plane; nothing changed.
    Missed,
    /// The drag ended; the segment is kept.
    Finished(SegmentId),
    /// The segment cap is reached; no drag was started.
    Refused,
}

/// Mouse-driven line drawing.
///
/// Idle until a secondary-button press lands on the ground plane (z = 0),
/// which anchors a new segment and opens a [`DragSession`]. While dragging,
/// pointer moves are projected onto the session's drag-plane and update only
/// the active segment's end point. Any button release closes the session.
#[derive(Debug, Clone, Default)]
pub struct LineDrawing {
    config: DrawingConfig,
    segments: SegmentStore,
    drag: Option<DragSession>,
}

impl LineDrawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DrawingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    pub fn segments(&self) -> &[LineSegment] {
        self.segments.as_slice()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&LineSegment> {
        self.segments.get(id)
    }

    pub fn next_id(&self) -> SegmentId {
        self.segments.next_id()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Dispatch a pointer event given in surface pixels.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        surface: &SurfaceRect,
        camera: &impl RayCamera,
    ) -> DrawOutcome {
        match event {
            PointerEvent::Down { button, position } => {
                self.pointer_down(button, surface.to_ndc(position), camera)
            }
            PointerEvent::Move { position } => self.pointer_move(surface.to_ndc(position), camera),
            PointerEvent::Up { button } => self.pointer_up(button),
        }
    }

    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        ndc: Vec2,
        camera: &impl RayCamera,
    ) -> DrawOutcome {
        if button != PointerButton::Secondary || self.drag.is_some() {
            return DrawOutcome::Ignored;
        }
        if let Some(max) = self.config.max_segments {
            if self.segments.len() >= max {
                tracing::warn!(max, "segment limit reached, drag refused");
                return DrawOutcome::Refused;
            }
        }

        let ray = camera.ray_through(ndc);
        let Some(origin) = ray.intersect_plane(&Plane::GROUND) else {
            tracing::debug!(?ndc, "pointer ray misses ground plane");
            return DrawOutcome::Missed;
        };

        let id = self.segments.push_anchored(origin);
        let normal = (origin - camera.eye()).normalize();
        self.drag = Some(DragSession {
            segment: id,
            plane: Plane::from_normal_and_point(normal, origin),
            origin,
        });
        tracing::debug!(%id, ?origin, "drag started");
        DrawOutcome::Started(id)
    }

    pub fn pointer_move(&mut self, ndc: Vec2, camera: &impl RayCamera) -> DrawOutcome {
        let Some(drag) = self.drag else {
            return DrawOutcome::Ignored;
        };

        let ray = camera.ray_through(ndc);
        let Some(end) = ray.intersect_plane(&drag.plane) else {
            tracing::debug!(?ndc, "pointer ray misses drag plane");
            return DrawOutcome::Missed;
        };

        self.segments.set_end(drag.segment, end);
        tracing::trace!(id = %drag.segment, ?end, "drag extended");
        DrawOutcome::Extended(drag.segment)
    }

    pub fn pointer_up(&mut self, _button: PointerButton) -> DrawOutcome {
        match self.drag.take() {
            Some(drag) => {
                tracing::debug!(id = %drag.segment, "drag finished");
                DrawOutcome::Finished(drag.segment)
            }
            None => DrawOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    /// Camera at (0, 0, 5) looking at the origin, like the default view.
    struct FrontCamera;

    impl RayCamera for FrontCamera {
        fn eye(&self) -> Vec3 {
            Vec3::new(0.0, 0.0, 5.0)
        }

        fn view_projection(&self) -> Mat4 {
            let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 800.0 / 600.0, 0.1, 1000.0);
            proj * Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
        }
    }

    /// Camera above the ground looking up, so the centre ray never reaches z = 0.
    struct SkyCamera;

    impl RayCamera for SkyCamera {
        fn eye(&self) -> Vec3 {
            Vec3::new(0.0, 0.0, 5.0)
        }

        fn view_projection(&self) -> Mat4 {
            let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 1.0, 0.1, 1000.0);
            proj * Mat4::look_at_rh(self.eye(), Vec3::new(0.0, 0.0, 10.0), Vec3::Y)
        }
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn secondary_down_appends_anchored_segment() {
        let mut drawing = LineDrawing::new();
        let outcome = drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);

        assert_eq!(outcome, DrawOutcome::Started(SegmentId(0)));
        assert_eq!(drawing.segments().len(), 1);
        let s = drawing.segments()[0];
        assert_eq!(s.start, s.end);
        assert!(close(s.start, Vec3::ZERO));
        assert!(drawing.is_dragging());
    }

    #[test]
    fn drag_plane_faces_away_from_camera() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        let drag = drawing.drag().unwrap();
        assert!(close(drag.plane.normal, Vec3::NEG_Z));
        assert!(drag.plane.signed_distance(drag.origin).abs() < 1e-5);
    }

    #[test]
    fn primary_down_is_ignored() {
        let mut drawing = LineDrawing::new();
        let outcome = drawing.pointer_down(PointerButton::Primary, Vec2::ZERO, &FrontCamera);
        assert_eq!(outcome, DrawOutcome::Ignored);
        assert!(drawing.segments().is_empty());
        assert!(!drawing.is_dragging());
    }

    #[test]
    fn drag_from_center_to_upper_right() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        let outcome = drawing.pointer_move(Vec2::new(0.5, 0.5), &FrontCamera);
        assert_eq!(outcome, DrawOutcome::Extended(SegmentId(0)));
        drawing.pointer_up(PointerButton::Secondary);

        let s = drawing.segments()[0];
        assert!(!close(s.start, s.end));
        assert!(s.end.x > 0.0 && s.end.y > 0.0);

        let mid = s.midpoint();
        let plane = Plane::GROUND;
        assert!(plane.signed_distance(mid).abs() < 1e-4);
        assert!(close(mid, (s.start + s.end) * 0.5));
        assert!(mid.x > s.start.x && mid.x < s.end.x);
        assert!(mid.y > s.start.y && mid.y < s.end.y);
    }

    #[test]
    fn move_only_changes_active_segment() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        drawing.pointer_move(Vec2::new(0.2, 0.0), &FrontCamera);
        drawing.pointer_up(PointerButton::Secondary);
        let first = drawing.segments()[0];

        drawing.pointer_down(PointerButton::Secondary, Vec2::new(-0.5, 0.0), &FrontCamera);
        drawing.pointer_move(Vec2::new(-0.5, -0.5), &FrontCamera);
        drawing.pointer_move(Vec2::new(-0.3, -0.6), &FrontCamera);

        assert_eq!(drawing.segments()[0], first);
        let second = drawing.segments()[1];
        assert_ne!(second.start, second.end);
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        let outcome =
            drawing.pointer_down(PointerButton::Secondary, Vec2::new(0.3, 0.3), &FrontCamera);
        assert_eq!(outcome, DrawOutcome::Ignored);
        assert_eq!(drawing.segments().len(), 1);
        assert_eq!(drawing.drag().unwrap().segment, SegmentId(0));
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut drawing = LineDrawing::new();
        assert_eq!(
            drawing.pointer_up(PointerButton::Secondary),
            DrawOutcome::Ignored
        );
        assert!(drawing.segments().is_empty());
        assert!(!drawing.is_dragging());
        assert_eq!(drawing.next_id(), SegmentId(0));
    }

    #[test]
    fn any_button_release_ends_drag() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        assert_eq!(
            drawing.pointer_up(PointerButton::Primary),
            DrawOutcome::Finished(SegmentId(0))
        );
        assert!(!drawing.is_dragging());
        assert_eq!(drawing.segments().len(), 1);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut drawing = LineDrawing::new();
        assert_eq!(
            drawing.pointer_move(Vec2::new(0.1, 0.1), &FrontCamera),
            DrawOutcome::Ignored
        );
    }

    #[test]
    fn ids_increase_across_sessions() {
        let mut drawing = LineDrawing::new();
        for i in 0..4 {
            let x = i as f32 * 0.1;
            drawing.pointer_down(PointerButton::Secondary, Vec2::new(x, 0.0), &FrontCamera);
            drawing.pointer_move(Vec2::new(x, 0.4), &FrontCamera);
            drawing.pointer_up(PointerButton::Secondary);
        }
        let ids: Vec<SegmentId> = drawing.segments().iter().map(|s| s.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(drawing.next_id(), SegmentId(4));
    }

    #[test]
    fn ground_miss_does_not_start_drag() {
        let mut drawing = LineDrawing::new();
        let outcome = drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &SkyCamera);
        assert_eq!(outcome, DrawOutcome::Missed);
        assert!(drawing.segments().is_empty());
        assert!(!drawing.is_dragging());
    }

    #[test]
    fn drag_plane_miss_keeps_previous_end() {
        let mut drawing = LineDrawing::new();
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        drawing.pointer_move(Vec2::new(0.2, 0.2), &FrontCamera);
        let before = drawing.segments()[0];

        // Same drag plane, but viewed from behind it: the ray points away.
        struct BehindCamera;
        impl RayCamera for BehindCamera {
            fn eye(&self) -> Vec3 {
                Vec3::new(0.0, 0.0, -5.0)
            }
            fn view_projection(&self) -> Mat4 {
                let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 1.0, 0.1, 1000.0);
                proj * Mat4::look_at_rh(self.eye(), Vec3::new(0.0, 0.0, -10.0), Vec3::Y)
            }
        }

        let outcome = drawing.pointer_move(Vec2::new(0.4, 0.4), &BehindCamera);
        assert_eq!(outcome, DrawOutcome::Missed);
        assert_eq!(drawing.segments()[0], before);
        assert!(drawing.is_dragging());
    }

    #[test]
    fn segment_cap_refuses_new_drags() {
        let mut drawing = LineDrawing::with_config(DrawingConfig {
            max_segments: Some(1),
        });
        drawing.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        drawing.pointer_up(PointerButton::Secondary);
        let outcome =
            drawing.pointer_down(PointerButton::Secondary, Vec2::new(0.5, 0.0), &FrontCamera);
        assert_eq!(outcome, DrawOutcome::Refused);
        assert_eq!(drawing.segments().len(), 1);
        assert!(!drawing.is_dragging());
    }

    #[test]
    fn handle_maps_pixels_to_ndc() {
        let mut drawing = LineDrawing::new();
        let surface = SurfaceRect::from_size(800.0, 600.0);
        drawing.handle(
            PointerEvent::Down {
                button: PointerButton::Secondary,
                position: Vec2::new(400.0, 300.0),
            },
            &surface,
            &FrontCamera,
        );
        drawing.handle(
            PointerEvent::Move {
                position: Vec2::new(600.0, 150.0),
            },
            &surface,
            &FrontCamera,
        );
        let outcome = drawing.handle(
            PointerEvent::Up {
                button: PointerButton::Secondary,
            },
            &surface,
            &FrontCamera,
        );
        assert_eq!(outcome, DrawOutcome::Finished(SegmentId(0)));

        let mut direct = LineDrawing::new();
        direct.pointer_down(PointerButton::Secondary, Vec2::ZERO, &FrontCamera);
        direct.pointer_move(Vec2::new(0.5, 0.5), &FrontCamera);
        assert!(close(drawing.segments()[0].end, direct.segments()[0].end));
    }
}
