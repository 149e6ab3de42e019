use crate::hittable::{HitRecord, Hittable};
use crate::materials::MaterialId;
use crate::math::{Point3, Ray};

/// Sphere with a sign-significant radius. A negative radius keeps the same
/// geometry but inverts the outward normal, which is how a hollow glass
/// shell is modeled: an inner sphere with negative radius nested inside the
/// outer one.
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub origin: Point3,
    pub radius: f64,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(origin: Point3, radius: f64, material: MaterialId) -> Self {
        Sphere {
            origin,
            radius,
            material,
        }
    }

    fn record_at(&self, r: Ray, time: f64) -> HitRecord {
        let point = r.point_at_parameter(time);
        // dividing by the signed radius flips the normal for hollow spheres
        let outward_normal = (point - self.origin) / self.radius;
        HitRecord::new(r, time, point, outward_normal, self.material)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let oc = r.origin - self.origin;
        let a = r.direction.norm_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_discriminant = discriminant.sqrt();

        // prefer the nearer root, fall back to the farther one
        let near = (-half_b - sqrt_discriminant) / a;
        if near > t0 && near < t1 {
            return Some(self.record_at(r, near));
        }
        let far = (-half_b + sqrt_discriminant) / a;
        if far > t0 && far < t1 {
            return Some(self.record_at(r, far));
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    fn probe() -> Ray {
        Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_head_on_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let hit = sphere.hit(probe(), 0.001, f64::INFINITY).unwrap();
        assert!((hit.time - 0.5).abs() < 1e-12);
        assert_eq!(hit.point, Point3::new(0.0, 0.0, -0.5));
        assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).is_near_zero());
        assert!(hit.front_face);
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let outer = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let hollow = Sphere::new(Point3::new(0.0, 0.0, -1.0), -0.5, MaterialId(0));
        let hit_outer = outer.hit(probe(), 0.001, f64::INFINITY).unwrap();
        let hit_hollow = hollow.hit(probe(), 0.001, f64::INFINITY).unwrap();
        assert_eq!(hit_outer.point, hit_hollow.point);
        // the geometric normal flips, so the face classification does too
        assert!(hit_outer.front_face);
        assert!(!hit_hollow.front_face);
        assert!((hit_outer.normal + Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
        assert!((hit_hollow.normal + Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 2.0, -1.0), 0.5, MaterialId(0));
        assert!(sphere.hit(probe(), 0.001, f64::INFINITY).is_none());
    }

    #[test]
    fn test_second_root_from_inside() {
        // ray starts inside the sphere, only the far root is in range
        let sphere = Sphere::new(Point3::ORIGIN, 1.0, MaterialId(0));
        let hit = sphere.hit(probe(), 0.001, f64::INFINITY).unwrap();
        assert!((hit.time - 1.0).abs() < 1e-12);
        assert!(!hit.front_face);
    }

    #[test]
    fn test_normal_faces_ray() {
        let sphere = Sphere::new(Point3::new(0.2, -0.1, -2.0), 0.7, MaterialId(0));
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.1, 0.0, -1.0));
        let hit = sphere.hit(r, 0.001, f64::INFINITY).unwrap();
        assert!(r.direction.dot(hit.normal) <= 0.0);
    }
}
