//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a fixed depth budget
//! - Gamma correction
//! - Anti-aliasing via jittered multi-sampling

use crate::{gen_f32, Camera, Color, Hittable};
use candela_math::{Interval, Ray};
use rand::RngCore;

/// Lower bound of the hit window; keeps a bounced ray from re-hitting
/// the surface it just left (shadow acne).
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 800,
            image_height: 400,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through the
/// scene, bouncing off surfaces and accumulating the attenuation product.
/// `depth` is the remaining bounce budget; when it runs out a hit
/// contributes black. A miss always returns the sky gradient.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let rec = match world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) {
        Some(rec) => rec,
        None => return sky_gradient(ray),
    };

    if depth == 0 {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth - 1, rng)
        }
        // Absorbed
        None => Color::ZERO,
    }
}

/// Compute the sky gradient background.
///
/// A vertical blend from white at the horizon to sky blue overhead,
/// independent of horizontal direction.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - t) + blue * t
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
///
/// Clamping and quantization happen only here, at emission time; the
/// rest of the pipeline works in unclamped linear radiance.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.999 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.999 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.999 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b]
}

/// Render a single pixel with jittered multi-sampling.
///
/// `i` counts columns from the left, `j` counts rows from the bottom.
/// Pure in everything but the RNG, so pixels are independent of one
/// another; a parallel driver only needs to discipline its seeds.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / config.image_width as f32;
        let v = (j as f32 + gen_f32(rng)) / config.image_height as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Image buffer of linear colors, row-major with row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to gamma-corrected 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// The vertical coordinate walks from `height - 1` down to 0 so the
/// buffer fills top row first, matching the output file order.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.image_width, config.image_height);

    for (row, j) in (0..config.image_height).rev().enumerate() {
        for i in 0..config.image_width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, row as u32, color);
        }
        log::debug!("scanline {}/{}", row + 1, config.image_height);
    }

    image
}
