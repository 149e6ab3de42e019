use crate::color::Color;
use crate::hittable::{HitRecord, Hittable};
use crate::math::{Point3, Ray};
use crate::world::World;

/// Offset along the normal before casting shadow rays. Without it, surfaces
/// intersect themselves at floating-point scale and speckle ("shadow acne").
pub const SHADOW_BIAS: f64 = 1e-3;

/// Point light with unclamped linear RGB intensity.
#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub position: Point3,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Point3, intensity: Color) -> Self {
        Light {
            position,
            intensity,
        }
    }
}

/// Sum of the analytic contributions of all visible lights at a hit point:
/// `n.l * intensity / distance^2`, with binary shadowing. Lights behind the
/// surface or coincident with the hit point contribute nothing.
pub fn direct_lighting(world: &World, hit: &HitRecord) -> Color {
    let mut accumulated = Color::BLACK;

    for light in &world.lights {
        let to_light = light.position - hit.point;
        let distance_squared = to_light.norm_squared();
        if distance_squared <= 0.0 {
            continue;
        }

        let light_direction = to_light / distance_squared.sqrt();
        let n_dot_l = hit.normal.dot(light_direction);
        if n_dot_l <= 0.0 {
            continue;
        }

        let distance = distance_squared.sqrt();
        let shadow_ray = Ray::new(hit.point + SHADOW_BIAS * hit.normal, light_direction);
        if world
            .objects
            .hit(shadow_ray, SHADOW_BIAS, distance - SHADOW_BIAS)
            .is_some()
        {
            continue;
        }

        accumulated += light.intensity * (n_dot_l / distance_squared);
    }

    accumulated
}
