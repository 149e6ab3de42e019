use super::Vec3;

/// Orthonormal basis around a surface normal.
pub struct TangentFrame {
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub normal: Vec3,
}

impl TangentFrame {
    /// Build a frame from a unit normal by crossing it with whichever world
    /// axis is not near-parallel to it.
    pub fn from_normal(normal: Vec3) -> Self {
        let helper = if normal.x.abs() > 0.9 {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };
        let tangent = normal.cross(helper).normalized();
        let bitangent = normal.cross(tangent);
        TangentFrame {
            tangent,
            bitangent,
            normal,
        }
    }

    #[inline]
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        self.tangent * v.x + self.bitangent * v.y + self.normal * v.z
    }
}
