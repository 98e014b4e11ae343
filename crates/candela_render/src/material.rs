//! Material trait for surface scattering.

use crate::{gen_f32, hittable::HitRecord};
use candela_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a scatter event: the per-channel attenuation this bounce
/// applies, and the outgoing ray to continue along.
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some(ScatterResult)` if the ray scatters, or `None` if it
    /// is absorbed and the path terminates.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut direction = rec.normal + random_in_unit_sphere(rng);

        // A sample almost opposite the normal would leave a near-zero
        // direction, which downstream hit tests cannot accept.
        if direction.length_squared() < 1e-8 {
            direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Metal (specular) material.
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: the color of the metal
    /// - `fuzz`: roughness, 0.0 = perfect mirror, clamped to [0, 1]
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction.normalize(), rec.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // A fuzzed reflection that dips below the surface is absorbed
        if direction.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, direction),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let unit_direction = ray_in.direction.normalize();
        let d_dot_n = unit_direction.dot(rec.normal);

        // The stored normal follows (p - center) / radius; which side of
        // the surface the ray is on falls out of the dot product.
        let (outward_normal, eta_ratio, cosine) = if d_dot_n > 0.0 {
            (-rec.normal, self.ior, self.ior * d_dot_n)
        } else {
            (rec.normal, 1.0 / self.ior, -d_dot_n)
        };

        // Refract unless total internal reflection or the Schlick
        // reflectance wins the coin flip.
        let direction = match refract(unit_direction, outward_normal, eta_ratio) {
            Some(refracted) if gen_f32(rng) >= reflectance(cosine, self.ior) => refracted,
            _ => reflect(unit_direction, rec.normal),
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector at a surface with the given index ratio.
///
/// Returns `None` on total internal reflection.
#[inline]
fn refract(v: Vec3, n: Vec3, eta_ratio: f32) -> Option<Vec3> {
    let dt = v.dot(n);
    let discriminant = 1.0 - eta_ratio * eta_ratio * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(eta_ratio * (v - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for reflectance.
#[inline]
fn reflectance(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Sample a uniform point in the unit ball by rejection.
///
/// About 52% of draws land inside, so the loop terminates almost surely;
/// no iteration cap is imposed.
fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
