//! Camera for ray generation.

use crate::gen_f32;
use candela_math::{Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Immutable after construction. Image-plane extents are scaled by the
/// focus distance, which places the plane of perfect focus where the
/// lens aims; together with the aperture offset this is what makes
/// depth of field geometrically correct.
#[derive(Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal basis, kept for lens offsets
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `look_from` / `look_at` / `vup`: camera pose
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: image width over height
    /// - `aperture`: lens diameter; 0 gives a pinhole camera
    /// - `focus_dist`: distance to the plane of perfect focus
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect_ratio * half_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let lower_left_corner = look_from
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        Self {
            origin: look_from,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image coordinates `s, t` in [0, 1].
    ///
    /// With a nonzero aperture the ray origin is jittered over the lens
    /// disk while the target point on the focus plane stays fixed.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}

/// Sample a random point in the unit disk (z = 0).
fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
