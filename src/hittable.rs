use crate::materials::MaterialId;
use crate::math::{Point3, Ray, Vec3};

/// Outcome of a successful ray/surface intersection. Transient: rebuilt for
/// every intersection test and discarded within one sample evaluation.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub time: f64,
    pub point: Point3,
    /// Always oriented against the incoming ray.
    pub normal: Vec3,
    pub front_face: bool,
    pub material: MaterialId,
}

impl HitRecord {
    /// Records a hit, flipping the geometric outward normal so the stored
    /// normal faces the ray. `front_face` remembers which side was struck.
    pub fn new(
        r: Ray,
        time: f64,
        point: Point3,
        outward_normal: Vec3,
        material: MaterialId,
    ) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        HitRecord {
            time,
            point,
            normal: if front_face {
                outward_normal
            } else {
                -outward_normal
            },
            front_face,
            material,
        }
    }
}

pub trait Hittable {
    /// Nearest intersection with `time` in `(t0, t1)`, or `None` on a miss.
    /// The lower bound keeps secondary rays from re-hitting their own origin.
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord>;
}
