use glam::{Mat4, Vec3};
use sceneswitch_common::{LineSegment, SceneKind};

use crate::scenes::{CubePose, WaveUniforms};

/// Hot pink.
pub const CUBE_COLOR: [f32; 4] = [1.0, 0.412, 0.706, 1.0];
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Edge length of the cube drawn at each segment midpoint.
pub const MARKER_SIZE: f32 = 0.1;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(20.0, 10.0, 10.0);

/// Edge length of the main cube.
pub const CUBE_SIZE: f32 = 1.0;
/// Side length of the square wave plane.
pub const WAVE_PLANE_SIZE: f32 = 4.0;
pub const WAVE_PLANE_SEGMENTS: u32 = 32;

/// Everything a backend needs to draw one frame of the active scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame<'a> {
    Cube(CubePose),
    Wave(WaveUniforms),
    Lines(&'a [LineSegment]),
}

impl Frame<'_> {
    pub fn scene(&self) -> SceneKind {
        match self {
            Self::Cube(_) => SceneKind::Cube,
            Self::Wave(_) => SceneKind::WavePlane,
            Self::Lines(_) => SceneKind::LineDrawing,
        }
    }
}

/// Model matrix for the main cube.
pub fn cube_model(pose: &CubePose) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(CUBE_SIZE), pose.rotation(), Vec3::ZERO)
}

/// Model matrix for the wave plane: the XY grid laid flat, facing +Y.
pub fn wave_model() -> Mat4 {
    Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
}

/// Model matrix for the marker cube of `segment`.
pub fn marker_model(segment: &LineSegment) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(MARKER_SIZE),
        glam::Quat::IDENTITY,
        segment.midpoint(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneswitch_common::SegmentId;

    #[test]
    fn marker_sits_at_midpoint() {
        let s = LineSegment {
            id: SegmentId(0),
            start: Vec3::new(0.0, 0.0, 0.0),
            end: Vec3::new(2.0, 4.0, 0.0),
        };
        let m = marker_model(&s);
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 0.0));
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::new(1.05, 2.05, 0.05)).length() < 1e-5);
    }

    #[test]
    fn wave_plane_lies_flat() {
        let up = wave_model().transform_vector3(Vec3::Z);
        assert!((up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn cube_model_at_rest_is_identity() {
        let m = cube_model(&CubePose::at(0.0));
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn frame_reports_its_scene() {
        assert_eq!(Frame::Cube(CubePose::at(0.0)).scene(), SceneKind::Cube);
        assert_eq!(Frame::Lines(&[]).scene(), SceneKind::LineDrawing);
    }
}
