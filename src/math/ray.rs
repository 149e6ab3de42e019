use super::{Point3, Vec3};

/// Parametric ray: `origin + t * direction`. Created fresh for every primary
/// ray and secondary bounce, never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(&self, time: f64) -> Point3 {
        self.origin + self.direction * time
    }
}
