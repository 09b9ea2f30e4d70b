use glam::{EulerRot, Quat, Vec2, Vec3};

/// Radians per second for both cube rotation axes.
pub const CUBE_ROTATION_SPEED: f32 = 0.5;

/// Base colour of the wave plane before intensity modulation.
pub const WAVE_BASE_COLOR: Vec3 = Vec3::new(0.2, 0.6, 1.0);

/// Amplitude of the wave colour modulation. Not user-adjustable.
pub const WAVE_COLOR_AMPLITUDE: f32 = 0.5;

const WAVE_FREQUENCY: f32 = 15.0;
const WAVE_SPEED: f32 = 3.0;
const WAVE_CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Rotation of the spinning cube at `elapsed` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePose {
    /// Angle about X, radians. Grows without bound.
    pub x: f32,
    /// Angle about Y, radians. Grows without bound.
    pub y: f32,
}

impl CubePose {
    pub fn at(elapsed: f32) -> Self {
        let angle = elapsed * CUBE_ROTATION_SPEED;
        Self { x: angle, y: angle }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// User-facing wave parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    height: f32,
}

impl WaveParams {
    pub const MIN_HEIGHT: f32 = 0.0;
    pub const MAX_HEIGHT: f32 = 2.0;
    pub const HEIGHT_STEP: f32 = 0.1;
    pub const DEFAULT_HEIGHT: f32 = 0.5;

    pub fn new(height: f32) -> Self {
        let mut params = Self::default();
        params.set_height(height);
        params
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Clamp into range; non-finite input becomes 0.
    pub fn set_height(&mut self, height: f32) {
        self.height = if height.is_finite() {
            height.clamp(Self::MIN_HEIGHT, Self::MAX_HEIGHT)
        } else {
            0.0
        };
    }

    /// Set from user-typed text. Anything that does not parse counts as 0.
    pub fn set_height_text(&mut self, text: &str) {
        let parsed = text.trim().parse::<f32>().unwrap_or(0.0);
        self.set_height(parsed);
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Uniform values fed to the wave shader for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveUniforms {
    pub time: f32,
    pub height: f32,
}

/// Planar distance of a texture coordinate from the plane's centre.
pub fn radial_distance(uv: Vec2) -> f32 {
    uv.distance(WAVE_CENTER)
}

fn wave_phase(uv: Vec2, time: f32) -> f32 {
    radial_distance(uv) * WAVE_FREQUENCY - time * WAVE_SPEED
}

/// Vertical displacement of the vertex at `uv`.
pub fn wave_offset(uv: Vec2, time: f32, height: f32) -> f32 {
    wave_phase(uv, time).sin() * height + 0.5
}

/// Brightness multiplier applied to [`WAVE_BASE_COLOR`] at `uv`.
pub fn wave_intensity(uv: Vec2, time: f32) -> f32 {
    wave_offset(uv, time, WAVE_COLOR_AMPLITUDE)
}

pub fn wave_color(uv: Vec2, time: f32) -> Vec3 {
    WAVE_BASE_COLOR * wave_intensity(uv, time)
}

/// Vertex of the subdivided wave plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

/// Flat grid in the XY plane centred on the origin, facing +Z.
///
/// Rows run top (+Y, v = 1) to bottom; uv spans [0, 1] on both axes.
/// Returns vertices and a triangle list.
pub fn plane_grid(width: f32, height: f32, cols: u32, rows: u32) -> (Vec<PlaneVertex>, Vec<u32>) {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let mut vertices = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for iy in 0..=rows {
        let v = iy as f32 / rows as f32;
        for ix in 0..=cols {
            let u = ix as f32 / cols as f32;
            vertices.push(PlaneVertex {
                position: Vec3::new((u - 0.5) * width, (0.5 - v) * height, 0.0),
                uv: Vec2::new(u, 1.0 - v),
            });
        }
    }

    let stride = cols + 1;
    let mut indices = Vec::with_capacity((cols * rows * 6) as usize);
    for iy in 0..rows {
        for ix in 0..cols {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = (iy + 1) * stride + ix + 1;
            let d = iy * stride + ix + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_rotation_is_linear_in_time() {
        assert_eq!(CubePose::at(0.0), CubePose { x: 0.0, y: 0.0 });
        assert_eq!(CubePose::at(2.0), CubePose { x: 1.0, y: 1.0 });
        let late = CubePose::at(1_000.0);
        assert_eq!(late.x, 500.0);
    }

    #[test]
    fn wave_center_at_time_zero() {
        let center = Vec2::new(0.5, 0.5);
        assert_eq!(radial_distance(center), 0.0);
        assert_eq!(wave_offset(center, 0.0, 1.5), 0.5);
        assert_eq!(wave_intensity(center, 0.0), 0.5);
    }

    #[test]
    fn wave_height_scales_displacement() {
        let uv = Vec2::new(0.6, 0.5);
        let flat = wave_offset(uv, 0.0, 0.0);
        assert_eq!(flat, 0.5);
        let expected = (0.1_f32 * 15.0).sin() * 2.0 + 0.5;
        assert!((wave_offset(uv, 0.0, 2.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn wave_color_stays_in_range() {
        for i in 0..20 {
            let t = i as f32 * 0.37;
            let c = wave_color(Vec2::new(0.1, 0.9), t);
            assert!(c.min_element() >= 0.0);
            assert!(c.max_element() <= 1.0);
        }
    }

    #[test]
    fn wave_params_clamp_and_default() {
        let mut params = WaveParams::default();
        assert_eq!(params.height(), 0.5);
        params.set_height(5.0);
        assert_eq!(params.height(), 2.0);
        params.set_height(-1.0);
        assert_eq!(params.height(), 0.0);
        params.set_height(f32::NAN);
        assert_eq!(params.height(), 0.0);
        assert_eq!(WaveParams::new(1.5).height(), 1.5);
    }

    #[test]
    fn malformed_height_text_is_zero() {
        let mut params = WaveParams::default();
        params.set_height_text("abc");
        assert_eq!(params.height(), 0.0);
        params.set_height_text(" 1.2 ");
        assert!((params.height() - 1.2).abs() < 1e-6);
        params.set_height_text("");
        assert_eq!(params.height(), 0.0);
    }

    #[test]
    fn plane_grid_dimensions() {
        let (verts, indices) = plane_grid(4.0, 4.0, 32, 32);
        assert_eq!(verts.len(), 33 * 33);
        assert_eq!(indices.len(), 32 * 32 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < verts.len()));

        let first = verts[0];
        assert_eq!(first.position, Vec3::new(-2.0, 2.0, 0.0));
        assert_eq!(first.uv, Vec2::new(0.0, 1.0));
        let last = verts[verts.len() - 1];
        assert_eq!(last.position, Vec3::new(2.0, -2.0, 0.0));
        assert_eq!(last.uv, Vec2::new(1.0, 0.0));
    }
}
