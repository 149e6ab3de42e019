mod point;
mod ray;
mod sample;
mod tangent_frame;
mod vec;

pub use point::Point3;
pub use ray::Ray;
pub use sample::{
    random_cosine_direction, random_unit_vector, RandomSampler, Sample1D, Sample2D, Sampler,
};
pub use tangent_frame::TangentFrame;
pub use vec::{Axis, Vec3};

pub use std::f64::consts::PI;
