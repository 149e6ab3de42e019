mod matte;
mod reflective;
mod transparent;

pub use matte::Matte;
pub use reflective::Reflective;
pub use transparent::Transparent;

use crate::color::Color;
use crate::hittable::HitRecord;
use crate::math::{Ray, Sampler};

/// Index into the scene's material table. Surfaces never own materials;
/// any number of them can reference the same entry.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub struct MaterialId(pub u16);

impl From<u16> for MaterialId {
    fn from(value: u16) -> Self {
        MaterialId(value)
    }
}

impl From<MaterialId> for usize {
    fn from(value: MaterialId) -> Self {
        value.0 as usize
    }
}

pub type MaterialTable = Vec<MaterialEnum>;

/// Outcome of a material interaction. `None` from [`Material::scatter`]
/// means the ray was absorbed.
#[derive(Copy, Clone, Debug)]
pub struct ScatterRecord {
    pub ray: Ray,
    pub attenuation: Color,
}

pub trait Material {
    /// Scatter the incoming ray at the hit point, drawing any randomness
    /// from `sampler`.
    fn scatter(
        &self,
        ray_in: Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord>;

    /// Surface color used by the direct-lighting term.
    fn base_color(&self) -> Color;

    /// Whether the surface responds to analytic point lights.
    fn is_diffuse(&self) -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug)]
pub enum MaterialEnum {
    Matte(Matte),
    Reflective(Reflective),
    Transparent(Transparent),
}

impl From<Matte> for MaterialEnum {
    fn from(value: Matte) -> Self {
        MaterialEnum::Matte(value)
    }
}

impl From<Reflective> for MaterialEnum {
    fn from(value: Reflective) -> Self {
        MaterialEnum::Reflective(value)
    }
}

impl From<Transparent> for MaterialEnum {
    fn from(value: Transparent) -> Self {
        MaterialEnum::Transparent(value)
    }
}

impl Material for MaterialEnum {
    fn scatter(
        &self,
        ray_in: Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        match self {
            MaterialEnum::Matte(inner) => inner.scatter(ray_in, hit, sampler),
            MaterialEnum::Reflective(inner) => inner.scatter(ray_in, hit, sampler),
            MaterialEnum::Transparent(inner) => inner.scatter(ray_in, hit, sampler),
        }
    }

    fn base_color(&self) -> Color {
        match self {
            MaterialEnum::Matte(inner) => inner.base_color(),
            MaterialEnum::Reflective(inner) => inner.base_color(),
            MaterialEnum::Transparent(inner) => inner.base_color(),
        }
    }

    fn is_diffuse(&self) -> bool {
        match self {
            MaterialEnum::Matte(inner) => inner.is_diffuse(),
            MaterialEnum::Reflective(inner) => inner.is_diffuse(),
            MaterialEnum::Transparent(inner) => inner.is_diffuse(),
        }
    }
}
