use crate::hittable::{HitRecord, Hittable};
use crate::materials::MaterialId;
use crate::math::{Axis, Ray, Vec3};

/// How a rectangle sits in space: which axes span it, which axis carries the
/// plane offset, and the normal before any flip.
#[derive(Copy, Clone, Debug)]
pub struct RectOrientation {
    pub tangent_u: Axis,
    pub tangent_v: Axis,
    pub normal_axis: Axis,
    pub base_normal: Vec3,
}

impl RectOrientation {
    pub const XY: RectOrientation = RectOrientation {
        tangent_u: Axis::X,
        tangent_v: Axis::Y,
        normal_axis: Axis::Z,
        base_normal: Vec3::new(0.0, 0.0, 1.0),
    };
    pub const XZ: RectOrientation = RectOrientation {
        tangent_u: Axis::X,
        tangent_v: Axis::Z,
        normal_axis: Axis::Y,
        base_normal: Vec3::new(0.0, 1.0, 0.0),
    };
    pub const YZ: RectOrientation = RectOrientation {
        tangent_u: Axis::Y,
        tangent_v: Axis::Z,
        normal_axis: Axis::X,
        base_normal: Vec3::new(1.0, 0.0, 0.0),
    };

    pub fn outward_normal(&self, flip: bool) -> Vec3 {
        if flip {
            -self.base_normal
        } else {
            self.base_normal
        }
    }
}

/// Axis-aligned rectangle on the plane `normal_axis = k`, spanning
/// `[u0, u1] x [v0, v1]` along the tangent axes. Callers are responsible for
/// `u0 <= u1` and `v0 <= v1`.
#[derive(Copy, Clone, Debug)]
pub struct AARect {
    pub orientation: RectOrientation,
    pub u0: f64,
    pub u1: f64,
    pub v0: f64,
    pub v1: f64,
    pub k: f64,
    pub material: MaterialId,
    pub flip_normal: bool,
}

impl AARect {
    pub fn new(
        orientation: RectOrientation,
        u0: f64,
        u1: f64,
        v0: f64,
        v1: f64,
        k: f64,
        material: MaterialId,
        flip_normal: bool,
    ) -> Self {
        AARect {
            orientation,
            u0,
            u1,
            v0,
            v1,
            k,
            material,
            flip_normal,
        }
    }

    pub fn xy(x0: f64, x1: f64, y0: f64, y1: f64, k: f64, material: MaterialId, flip: bool) -> Self {
        AARect::new(RectOrientation::XY, x0, x1, y0, y1, k, material, flip)
    }

    pub fn xz(x0: f64, x1: f64, z0: f64, z1: f64, k: f64, material: MaterialId, flip: bool) -> Self {
        AARect::new(RectOrientation::XZ, x0, x1, z0, z1, k, material, flip)
    }

    pub fn yz(y0: f64, y1: f64, z0: f64, z1: f64, k: f64, material: MaterialId, flip: bool) -> Self {
        AARect::new(RectOrientation::YZ, y0, y1, z0, z1, k, material, flip)
    }
}

impl Hittable for AARect {
    fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let orientation = &self.orientation;
        let denominator = r.direction.component(orientation.normal_axis);
        if denominator.abs() < 1e-8 {
            // ray parallel to the plane
            return None;
        }

        let offset = self.k - r.origin.component(orientation.normal_axis);
        let time = offset / denominator;
        if time < t0 || time > t1 {
            return None;
        }

        let u = r.origin.component(orientation.tangent_u)
            + time * r.direction.component(orientation.tangent_u);
        let v = r.origin.component(orientation.tangent_v)
            + time * r.direction.component(orientation.tangent_v);
        if u < self.u0 || u > self.u1 || v < self.v0 || v > self.v1 {
            return None;
        }

        Some(HitRecord::new(
            r,
            time,
            r.point_at_parameter(time),
            orientation.outward_normal(self.flip_normal),
            self.material,
        ))
    }
}
