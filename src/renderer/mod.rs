mod vec2d;

pub use vec2d::Vec2D;

use rayon::prelude::*;
use tracing::info;

use crate::camera::Camera;
use crate::color::Color;
use crate::config::Config;
use crate::integrator::WhittedIntegrator;
use crate::math::{RandomSampler, Sample2D, Sampler};
use crate::world::World;

/// Mixes the render seed with a pixel index into an independent stream seed.
/// Every pixel gets its own sampler, so the image is identical for a fixed
/// seed no matter how rayon schedules the work.
fn pixel_seed(seed: u64, pixel_index: usize) -> u64 {
    (seed ^ (pixel_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)).wrapping_add(pixel_index as u64)
}

/// Parallel per-pixel renderer over a flat film buffer. No tiling and no
/// progressive output; one pass produces the finished film.
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    pub fn render(&self, world: &World, camera: &Camera, config: &Config) -> Vec2D<Color> {
        let (width, height) = (config.resolution.width, config.resolution.height);
        let samples_per_pixel = config.samples_per_pixel.max(1);
        let integrator = WhittedIntegrator::new(config.max_depth);

        info!(
            "starting render: {}x{}, {} samples per pixel, max depth {}, {} objects, {} lights",
            width,
            height,
            samples_per_pixel,
            config.max_depth,
            world.objects.len(),
            world.lights.len()
        );

        let mut film: Vec2D<Color> = Vec2D::new(width, height, Color::BLACK);
        film.buffer
            .par_iter_mut()
            .enumerate()
            .for_each(|(pixel_index, pixel_ref)| {
                let x = pixel_index % width;
                let y = pixel_index / width;
                // film row 0 is the top scanline; the camera counts rows
                // upward from the lower-left corner
                let row = height - 1 - y;

                let mut sampler = RandomSampler::new(pixel_seed(config.seed, pixel_index));
                let mut accumulated = Color::BLACK;
                for _ in 0..samples_per_pixel {
                    let offset = if config.jitter {
                        sampler.draw_2d()
                    } else {
                        Sample2D::new(0.5, 0.5)
                    };
                    let u = (x as f64 + offset.x) / (width - 1) as f64;
                    let v = (row as f64 + offset.y) / (height - 1) as f64;
                    accumulated += integrator.color(camera.get_ray(u, v), world, &mut sampler);
                }
                *pixel_ref = accumulated / f64::from(samples_per_pixel);
            });

        info!("render finished");
        film
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

/// Quantize the film into the packed RGB byte buffer the PNG writer expects:
/// three bytes per pixel, rows in film order (top scanline first).
pub fn film_to_rgb8(film: &Vec2D<Color>) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(film.total_pixels() * 3);
    for pixel in &film.buffer {
        rgb.extend_from_slice(&pixel.to_srgb_bytes());
    }
    rgb
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{Config, Resolution};
    use crate::world::{cornell_room, default_lights, RoomLayout};

    fn tiny_config(seed: u64, jitter: bool) -> Config {
        Config {
            resolution: Resolution {
                width: 16,
                height: 9,
            },
            samples_per_pixel: 2,
            max_depth: 4,
            seed,
            jitter,
            output_path: String::new(),
        }
    }

    fn demo_world() -> World {
        let layout = RoomLayout::default();
        cornell_room(&layout, default_lights(&layout))
    }

    #[test]
    fn test_identical_seeds_render_identically() {
        let world = demo_world();
        let camera = Camera::new(16.0 / 9.0, 2.0, 1.0);
        let renderer = NaiveRenderer::new();
        let a = renderer.render(&world, &camera, &tiny_config(1234, true));
        let b = renderer.render(&world, &camera, &tiny_config(1234, true));
        assert_eq!(film_to_rgb8(&a), film_to_rgb8(&b));
    }

    #[test]
    fn test_different_seeds_differ() {
        let world = demo_world();
        let camera = Camera::new(16.0 / 9.0, 2.0, 1.0);
        let renderer = NaiveRenderer::new();
        let a = renderer.render(&world, &camera, &tiny_config(1, true));
        let b = renderer.render(&world, &camera, &tiny_config(2, true));
        assert_ne!(film_to_rgb8(&a), film_to_rgb8(&b));
    }

    #[test]
    fn test_buffer_shape() {
        let world = demo_world();
        let camera = Camera::new(16.0 / 9.0, 2.0, 1.0);
        let film = NaiveRenderer::new().render(&world, &camera, &tiny_config(0, false));
        assert_eq!(film.total_pixels(), 16 * 9);
        assert_eq!(film_to_rgb8(&film).len(), 16 * 9 * 3);
    }
}
