use crate::color::Color;
use crate::hittable::HitRecord;
use crate::math::{random_unit_vector, Ray, Sampler};

use super::{Material, ScatterRecord};

/// Fuzzy mirror. `fuzz = 0` is a perfect mirror; larger values perturb the
/// reflection by a scaled random unit vector. A perturbed ray that ends up
/// pointing into the surface is absorbed.
#[derive(Copy, Clone, Debug)]
pub struct Reflective {
    pub color: Color,
    pub fuzz: f64,
}

impl Reflective {
    pub fn new(color: Color, fuzz: f64) -> Self {
        Reflective {
            color,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Reflective {
    fn scatter(
        &self,
        ray_in: Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let reflected = ray_in.direction.normalized().reflect(hit.normal)
            + self.fuzz * random_unit_vector(sampler.draw_2d());

        if reflected.dot(hit.normal) <= 0.0 {
            return None;
        }
        Some(ScatterRecord {
            ray: Ray::new(hit.point, reflected),
            attenuation: self.color,
        })
    }

    fn base_color(&self) -> Color {
        self.color
    }
}
