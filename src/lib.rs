pub mod camera;
pub mod color;
pub mod config;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod lighting;
pub mod materials;
pub mod math;
pub mod png;
pub mod renderer;
pub mod world;

pub mod prelude;
