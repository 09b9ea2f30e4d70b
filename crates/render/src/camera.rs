use glam::{Mat4, Vec2, Vec3};
use sceneswitch_common::RayCamera;

/// Orbit camera circling a fixed target.
///
/// Position is kept in spherical coordinates around `target` with Y up:
/// `azimuth` turns around Y, `polar` is measured from +Y. Panning is not
/// supported; the target stays put.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Radians per pixel of pointer travel, scaled by surface height.
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

const POLAR_EPSILON: f32 = 1e-3;

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            rotate_speed: 1.0,
            min_distance: 1.0,
            max_distance: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn position(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    /// Orbit by a pointer drag of `delta` pixels on a surface `surface_height` tall.
    ///
    /// A drag across the full surface height turns the camera a full circle.
    pub fn orbit(&mut self, delta: Vec2, surface_height: f32) {
        let scale = std::f32::consts::TAU * self.rotate_speed / surface_height.max(1.0);
        self.azimuth -= delta.x * scale;
        self.polar = (self.polar - delta.y * scale)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
    }

    /// Dolly toward (positive `steps`) or away from the target.
    pub fn zoom(&mut self, steps: f32) {
        let factor = 0.95_f32.powf(steps);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

impl RayCamera for OrbitCamera {
    fn eye(&self) -> Vec3 {
        self.position()
    }

    fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
