use crate::hittable::{HitRecord, Hittable};
use crate::materials::MaterialId;
use crate::math::{Point3, Ray};

use super::rect::AARect;

/// Axis-aligned box composed of six outward-facing rectangles. There is no
/// separate volume test; the nearest face hit wins.
#[derive(Copy, Clone, Debug)]
pub struct Cuboid {
    pub min: Point3,
    pub max: Point3,
    sides: [AARect; 6],
}

impl Cuboid {
    pub fn new(min: Point3, max: Point3, material: MaterialId) -> Self {
        let sides = [
            AARect::xy(min.x, max.x, min.y, max.y, max.z, material, false),
            AARect::xy(min.x, max.x, min.y, max.y, min.z, material, true),
            AARect::xz(min.x, max.x, min.z, max.z, max.y, material, false),
            AARect::xz(min.x, max.x, min.z, max.z, min.y, material, true),
            AARect::yz(min.y, max.y, min.z, max.z, max.x, material, false),
            AARect::yz(min.y, max.y, min.z, max.z, min.x, material, true),
        ];
        Cuboid { min, max, sides }
    }
}

impl Hittable for Cuboid {
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let mut closest_so_far = t1;
        let mut hit_record = None;
        for side in &self.sides {
            if let Some(hit) = side.hit(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                hit_record = Some(hit);
            }
        }
        hit_record
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    fn unit_cuboid() -> Cuboid {
        Cuboid::new(
            Point3::new(-0.5, -0.5, -2.0),
            Point3::new(0.5, 0.5, -1.0),
            MaterialId(0),
        )
    }

    #[test]
    fn test_nearest_face_wins() {
        let cuboid = unit_cuboid();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let hit = cuboid.hit(r, 0.001, f64::INFINITY).unwrap();
        assert!((hit.time - 1.0).abs() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).is_near_zero());
    }

    #[test]
    fn test_side_face_normal() {
        let cuboid = unit_cuboid();
        let r = Ray::new(Point3::new(2.0, 0.0, -1.5), Vec3::new(-1.0, 0.0, 0.0));
        let hit = cuboid.hit(r, 0.001, f64::INFINITY).unwrap();
        assert!((hit.normal - Vec3::new(1.0, 0.0, 0.0)).is_near_zero());
    }

    #[test]
    fn test_miss() {
        let cuboid = unit_cuboid();
        let r = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(cuboid.hit(r, 0.001, f64::INFINITY).is_none());
    }
}
