use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera at the origin looking down -z. The four vectors are all
/// the integrator ever consumes; primary rays are derived from them.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Point3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub lower_left_corner: Point3,
}

impl Camera {
    pub fn new(aspect_ratio: f64, viewport_height: f64, focal_length: f64) -> Self {
        let origin = Point3::ORIGIN;
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);
        Camera {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Ray through viewport coordinates `(u, v)` in `[0, 1]^2`, with (0, 0)
    /// at the lower-left corner.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(16.0 / 9.0, 2.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(16.0 / 9.0, 2.0, 1.0);
        let r = camera.get_ray(0.5, 0.5);
        assert!((r.direction - Vec3::new(0.0, 0.0, -1.0)).is_near_zero());
    }

    #[test]
    fn test_corner_rays_span_viewport() {
        let camera = Camera::new(2.0, 2.0, 1.0);
        let lower_left = camera.get_ray(0.0, 0.0).direction;
        let upper_right = camera.get_ray(1.0, 1.0).direction;
        assert!((lower_left - Vec3::new(-2.0, -1.0, -1.0)).is_near_zero());
        assert!((upper_right - Vec3::new(2.0, 1.0, -1.0)).is_near_zero());
    }
}
