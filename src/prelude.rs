pub use crate::camera::Camera;
pub use crate::color::Color;
pub use crate::config::{get_settings, Config, Resolution, TOMLConfig};
pub use crate::geometry::{AARect, Aggregate, Cuboid, HittableList, RectOrientation, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::{sky_color, WhittedIntegrator, HIT_EPSILON};
pub use crate::lighting::{direct_lighting, Light, SHADOW_BIAS};
pub use crate::materials::{
    Material, MaterialEnum, MaterialId, MaterialTable, Matte, Reflective, ScatterRecord,
    Transparent,
};
pub use crate::math::*;
pub use crate::renderer::{film_to_rgb8, NaiveRenderer, Vec2D};
pub use crate::world::{cornell_room, default_lights, ring_of_lights, RoomLayout, World};
