use crate::color::Color;
use crate::hittable::HitRecord;
use crate::math::{Ray, Sampler};

use super::{Material, ScatterRecord};

/// Dielectric like glass or water. Never absorbs; every interaction either
/// reflects or refracts, with the split decided by Schlick's approximation
/// of the Fresnel equations.
#[derive(Copy, Clone, Debug)]
pub struct Transparent {
    pub refractive_index: f64,
}

impl Transparent {
    pub fn new(refractive_index: f64) -> Self {
        Transparent { refractive_index }
    }

    fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
        let r0 = (1.0 - refraction_ratio) / (1.0 + refraction_ratio);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Transparent {
    fn scatter(
        &self,
        ray_in: Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let refraction_ratio = if hit.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_direction = ray_in.direction.normalized();
        let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // total internal reflection leaves no refraction branch at all
        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > sampler.draw_1d().x
        {
            unit_direction.reflect(hit.normal)
        } else {
            unit_direction.refract(hit.normal, refraction_ratio)
        };

        Some(ScatterRecord {
            ray: Ray::new(hit.point, direction),
            attenuation: Color::WHITE,
        })
    }

    fn base_color(&self) -> Color {
        Color::WHITE
    }
}
