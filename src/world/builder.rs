use crate::color::Color;
use crate::geometry::{AARect, Cuboid, Sphere};
use crate::lighting::Light;
use crate::materials::{Matte, Reflective, Transparent};
use crate::math::{Point3, PI};

use super::World;

/// Dimensions of the Cornell-style demo room. The front stays open toward
/// the camera at the origin; everything else is walled in.
#[derive(Copy, Clone, Debug)]
pub struct RoomLayout {
    pub half_width: f64,
    pub half_depth: f64,
    pub floor_y: f64,
    pub ceiling_y: f64,
    pub back_wall_z: f64,
    pub front_opening_z: f64,
}

impl Default for RoomLayout {
    fn default() -> Self {
        RoomLayout {
            half_width: 4.0,
            half_depth: 3.5,
            floor_y: -1.0,
            ceiling_y: 3.4,
            back_wall_z: -6.0,
            front_opening_z: 1.0,
        }
    }
}

impl RoomLayout {
    pub fn center_z(&self) -> f64 {
        self.back_wall_z + self.half_depth
    }
}

/// Single ceiling lamp, dropped slightly below the ceiling plane so it does
/// not sit inside the geometry.
pub fn default_lights(layout: &RoomLayout) -> Vec<Light> {
    let lamp_drop = 0.3;
    vec![Light::new(
        Point3::new(0.0, layout.ceiling_y - lamp_drop, layout.center_z()),
        Color::splat(10.0),
    )]
}

/// Lights spaced evenly on a horizontal ring, so the scene is lit from
/// several directions at once.
pub fn ring_of_lights(count: usize, radius: f64, height: f64, center_z: f64) -> Vec<Light> {
    (0..count)
        .map(|index| {
            let angle = 2.0 * PI * (index as f64) / (count as f64);
            Light::new(
                Point3::new(radius * angle.cos(), height, center_z + 1.5 * angle.sin()),
                Color::splat(14.0),
            )
        })
        .collect()
}

/// Cornell-box inspired demo scene: neutral floor/ceiling/back wall, colored
/// side walls, a matte block, a fuzzy metal sphere, and a hollow glass
/// sphere built from an outer shell and a negative-radius inner shell.
pub fn cornell_room(layout: &RoomLayout, lights: Vec<Light>) -> World {
    let mut world = World::default();

    let white = world.add_material(Matte::new(Color::splat(0.73)));
    let red = world.add_material(Matte::new(Color::new(0.65, 0.05, 0.05)));
    let green = world.add_material(Matte::new(Color::new(0.12, 0.45, 0.15)));
    let block = world.add_material(Matte::new(Color::new(0.55, 0.45, 0.35)));
    let metal = world.add_material(Reflective::new(Color::new(0.8, 0.85, 0.88), 0.05));
    let glass = world.add_material(Transparent::new(1.5));

    let (x0, x1) = (-layout.half_width, layout.half_width);
    let (z0, z1) = (layout.back_wall_z, layout.front_opening_z);
    let (y0, y1) = (layout.floor_y, layout.ceiling_y);

    // room shell, normals facing inward
    world
        .objects
        .push(AARect::xz(x0, x1, z0, z1, y0, white, false)); // floor
    world
        .objects
        .push(AARect::xz(x0, x1, z0, z1, y1, white, true)); // ceiling
    world
        .objects
        .push(AARect::xy(x0, x1, y0, y1, z0, white, false)); // back wall
    world
        .objects
        .push(AARect::yz(y0, y1, z0, z1, x0, red, false)); // left wall
    world
        .objects
        .push(AARect::yz(y0, y1, z0, z1, x1, green, true)); // right wall

    let center_z = layout.center_z();

    world.objects.push(Cuboid::new(
        Point3::new(-0.4, y0, center_z - 2.0),
        Point3::new(0.9, y0 + 1.4, center_z - 0.9),
        block,
    ));
    world.objects.push(Sphere::new(
        Point3::new(1.9, y0 + 0.65, center_z - 0.2),
        0.65,
        metal,
    ));

    let glass_center = Point3::new(-1.6, y0 + 0.6, center_z + 0.6);
    world.objects.push(Sphere::new(glass_center, 0.6, glass));
    // hollow shell: same center, negative radius turns the normal inward
    world.objects.push(Sphere::new(glass_center, -0.55, glass));

    world.lights = lights;
    world
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hittable::Hittable;
    use crate::materials::Material;
    use crate::math::{Ray, Vec3};

    #[test]
    fn test_room_wall_normals_face_inward() {
        let world = cornell_room(&RoomLayout::default(), vec![]);
        let center = Point3::new(0.0, 1.0, -2.5);
        for direction in [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ] {
            let hit = world
                .objects
                .hit(Ray::new(center, direction), 0.001, f64::INFINITY)
                .expect("room is closed in this direction");
            assert!(hit.front_face, "wall hit from inside along {direction:?}");
        }
    }

    #[test]
    fn test_demo_scene_has_all_material_kinds() {
        let layout = RoomLayout::default();
        let world = cornell_room(&layout, default_lights(&layout));
        assert!(world.materials.iter().any(|m| m.is_diffuse()));
        assert_eq!(world.lights.len(), 1);
        assert!(world.objects.len() >= 9);
    }

    #[test]
    fn test_ring_of_lights_layout() {
        let lights = ring_of_lights(3, 6.0, 6.0, -2.5);
        assert_eq!(lights.len(), 3);
        for light in &lights {
            assert!((light.position.y - 6.0).abs() < 1e-12);
        }
    }
}
