use crate::hittable::{HitRecord, Hittable};
use crate::math::Ray;

use super::Aggregate;

/// Flat scene aggregate. Linear scan, shrinking the upper bound to the
/// closest hit so far, so the returned record is the globally nearest
/// intersection in the original range. No spatial index.
#[derive(Default)]
pub struct HittableList {
    pub list: Vec<Aggregate>,
}

impl HittableList {
    pub fn new(list: Vec<Aggregate>) -> HittableList {
        HittableList { list }
    }

    pub fn push(&mut self, shape: impl Into<Aggregate>) {
        self.list.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let mut closest_so_far = t1;
        let mut hit_record = None;
        for hittable in &self.list {
            if let Some(hit) = hittable.hit(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                hit_record = Some(hit);
            }
        }
        hit_record
    }
}
