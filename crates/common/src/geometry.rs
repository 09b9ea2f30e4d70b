use glam::{Mat4, Vec2, Vec3};

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to `plane`, if the ray reaches it.
    ///
    /// A ray lying in the plane hits at its origin. A ray parallel to the
    /// plane (and not in it) or pointing away from it has no hit.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom == 0.0 {
            return (plane.signed_distance(self.origin) == 0.0).then_some(0.0);
        }
        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        (t >= 0.0 && t.is_finite()).then_some(t)
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }
}

/// Plane in Hessian normal form: points `p` with `normal · p + constant == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit length.
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// The z = 0 plane used as the drawing ground.
    pub const GROUND: Plane = Plane {
        normal: Vec3::Z,
        constant: 0.0,
    };

    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Plane with unit `normal` passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Anything that can cast a pointer ray into the scene.
///
/// Implementors supply the eye position and the combined view-projection
/// matrix; the ray through a viewport point is derived from those.
pub trait RayCamera {
    fn eye(&self) -> Vec3;

    fn view_projection(&self) -> Mat4;

    /// Ray from the eye through the given normalized device coordinates.
    ///
    /// The target point is unprojected at mid depth; any depth on the same
    /// pixel yields the same direction for a perspective projection.
    fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let eye = self.eye();
        let target = inverse.project_point3(ndc.extend(0.5));
        Ray::new(eye, target - eye)
    }
}
