mod cuboid;
mod hittable_list;
mod rect;
mod sphere;

pub use cuboid::Cuboid;
pub use hittable_list::HittableList;
pub use rect::{AARect, RectOrientation};
pub use sphere::Sphere;

use crate::hittable::{HitRecord, Hittable};
use crate::math::Ray;

/// Closed set of scene primitives, dispatched by match. New shapes are added
/// here rather than behind a trait object.
pub enum Aggregate {
    Sphere(Sphere),
    AARect(AARect),
    Cuboid(Cuboid),
}

impl From<Sphere> for Aggregate {
    fn from(data: Sphere) -> Self {
        Aggregate::Sphere(data)
    }
}

impl From<AARect> for Aggregate {
    fn from(data: AARect) -> Self {
        Aggregate::AARect(data)
    }
}

impl From<Cuboid> for Aggregate {
    fn from(data: Cuboid) -> Self {
        Aggregate::Cuboid(data)
    }
}

impl Hittable for Aggregate {
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        match self {
            Aggregate::Sphere(sphere) => sphere.hit(r, t0, t1),
            Aggregate::AARect(rect) => rect.hit(r, t0, t1),
            Aggregate::Cuboid(cuboid) => cuboid.hit(r, t0, t1),
        }
    }
}
