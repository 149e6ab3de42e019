mod builder;

pub use builder::{cornell_room, default_lights, ring_of_lights, RoomLayout};

use crate::geometry::HittableList;
use crate::hittable::{HitRecord, Hittable};
use crate::lighting::Light;
use crate::materials::{MaterialEnum, MaterialId, MaterialTable};
use crate::math::Ray;

/// Everything the integrator reads: geometry, analytic lights, and the
/// material table the geometry indexes into. Built once before rendering,
/// never mutated afterward.
#[derive(Default)]
pub struct World {
    pub objects: HittableList,
    pub lights: Vec<Light>,
    pub materials: MaterialTable,
}

impl World {
    pub fn add_material(&mut self, material: impl Into<MaterialEnum>) -> MaterialId {
        let id = MaterialId(self.materials.len() as u16);
        self.materials.push(material.into());
        id
    }

    pub fn material(&self, id: MaterialId) -> &MaterialEnum {
        &self.materials[usize::from(id)]
    }

    pub fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        self.objects.hit(r, t0, t1)
    }
}
