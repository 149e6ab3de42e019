use crate::color::Color;
use crate::hittable::HitRecord;
use crate::math::{random_cosine_direction, Ray, Sampler, TangentFrame};

use super::{Material, ScatterRecord};

/// Diffuse surface. Scatters into the hemisphere around the shading normal
/// with cosine weighting, which is much lower variance than uniform
/// scattering for the same sample count.
#[derive(Copy, Clone, Debug)]
pub struct Matte {
    pub color: Color,
}

impl Matte {
    pub fn new(color: Color) -> Self {
        Matte { color }
    }
}

impl Material for Matte {
    fn scatter(
        &self,
        _ray_in: Ray,
        hit: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let frame = TangentFrame::from_normal(hit.normal);
        let mut direction = frame.to_world(random_cosine_direction(sampler.draw_2d()));

        if direction.is_near_zero() {
            direction = hit.normal;
        }

        Some(ScatterRecord {
            ray: Ray::new(hit.point, direction),
            attenuation: self.color,
        })
    }

    fn base_color(&self) -> Color {
        self.color
    }

    fn is_diffuse(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::materials::MaterialId;
    use crate::math::{Point3, RandomSampler, Vec3};

    fn upward_hit() -> HitRecord {
        HitRecord::new(
            Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
            1.0,
            Point3::ORIGIN,
            Vec3::new(0.0, 1.0, 0.0),
            MaterialId(0),
        )
    }

    #[test]
    fn test_always_scatters_into_upper_hemisphere() {
        let matte = Matte::new(Color::new(0.6, 0.3, 0.1));
        let hit = upward_hit();
        let mut sampler = RandomSampler::new(3);
        for _ in 0..1000 {
            let ray_in = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
            let scatter = matte.scatter(ray_in, &hit, &mut sampler).unwrap();
            assert!(scatter.ray.direction.dot(hit.normal) >= 0.0);
            assert_eq!(scatter.attenuation, matte.color);
        }
    }

    #[test]
    fn test_reports_diffuse() {
        let matte = Matte::new(Color::WHITE);
        assert!(matte.is_diffuse());
        assert_eq!(matte.base_color(), Color::WHITE);
    }
}
