//! Lumen - adaptive CPU path tracing for sphere scenes
//!
//! A recursive Monte Carlo path tracer that renders a fixed scene of
//! spheres into an RGBA8 buffer. Sampling density adapts per 2x2 block:
//! flat regions get one sample, regions that differ from their already
//! rendered neighbors get one per pixel.
//!
//! # Example
//!
//! ```no_run
//! use lumen_renderer::{render, PixelBuffer, RenderOptions, Scene};
//! use rand::SeedableRng;
//!
//! let options = RenderOptions::default().with_resolution(320, 240);
//! let mut buffer = PixelBuffer::for_options(&options);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! render(&mut buffer, &options, &Scene::default_scene(), &mut rng);
//! ```

mod adaptive;
mod block;
mod camera;
mod error;
mod hittable;
mod material;
mod options;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use adaptive::{render, render_with_stats, RenderStats};
pub use block::{generate_blocks, Block, BLOCK_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{reflect, reflectance, refract, Color, Material, ScatterResult};
pub use options::{RenderOptions, MAX_DEPTH_LIMIT};
pub use renderer::{color_to_rgba, ray_color, sky_gradient, PixelBuffer};
pub use sampling::{gen_f32, random_in_unit_sphere, random_on_unit_sphere, DiffuseSampling};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
