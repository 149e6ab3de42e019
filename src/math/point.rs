use std::ops::{Add, Sub};

use super::vec::{Axis, Vec3};

/// Position in 3d space. Subtracting two points yields the `Vec3` between
/// them; adding a `Vec3` translates the point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, other: Point3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, offset: Vec3) -> Point3 {
        Point3::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, offset: Vec3) -> Point3 {
        self + (-offset)
    }
}
