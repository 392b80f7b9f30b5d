//! Recursive ray tracer: spheres, three scattering materials, a thin-lens
//! camera and a seeded, parallel per-pixel integrator with PPM output.

mod camera;
mod color;
mod error;
mod hittable;
mod hittable_list;
mod interval;
mod material;
mod ray;
mod scene;
mod sphere;
mod vec3;

pub mod common;
pub mod render;
pub mod scenes;

pub use crate::common::*;
pub use crate::render::{ray_color, render, render_pixel, sky_color};
