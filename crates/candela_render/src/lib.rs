//! Candela - CPU Monte Carlo path tracing.
//!
//! A recursive path tracer over analytic sphere scenes: rays are cast
//! from a thin-lens camera, scattered by diffuse/metal/dielectric
//! materials, and averaged into a gamma-corrected image.
//!
//! Randomness is an explicit capability: every sampling operation takes
//! `&mut dyn RngCore`, so a seeded generator reproduces a render
//! byte-for-byte.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{save_png, save_ppm, write_ppm};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, RenderConfig,
    T_MIN,
};
pub use scene::{classic_scene, random_scene};
pub use sphere::{GeometryError, Sphere};

/// Re-export math types from candela_math
pub use candela_math::{Interval, Ray, Vec3};

use rand::RngCore;

/// Generate a uniform f32 in [0, 1) from a single RNG draw.
///
/// Uses the top 24 bits so every value is exactly representable.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1 << 24) as f32)
}
