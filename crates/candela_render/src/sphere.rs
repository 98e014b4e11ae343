//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use candela_math::{Interval, Ray, Vec3};
use std::sync::Arc;
use thiserror::Error;

/// Construction-time validation errors for scene geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A zero radius makes the quadratic degenerate and the normal
    /// formula divide by zero.
    #[error("sphere radius must be nonzero")]
    ZeroRadius,
}

/// A sphere primitive.
///
/// The radius may be negative: the normal is computed as
/// `(p - center) / radius`, so a negative radius flips it inward, which
/// models a hollow shell (useful for dielectric bubbles).
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Rejects a zero radius.
    pub fn new(
        center: Vec3,
        radius: f32,
        material: Arc<dyn Material>,
    ) -> Result<Self, GeometryError> {
        if radius == 0.0 {
            return Err(GeometryError::ZeroRadius);
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first; both are checked against the open interval
        // so a root exactly at the window edge is rejected.
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Lambertian};

    fn unit_sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )
        .unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("ray aims straight at the sphere");

        // Analytic roots are 0.5 and 1.5; the near one wins
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_boundary_roots_rejected() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both analytic roots (0.5 and 1.5) fall exactly on the window
        // edges, so neither is accepted.
        assert!(sphere.hit(&ray, Interval::new(0.5, 1.5)).is_none());

        // Opening the far edge exposes the far root only
        let rec = sphere.hit(&ray, Interval::new(0.5, 2.0)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_hit_from_inside() {
        let sphere = unit_sphere();

        // Origin at the center: the near root is negative and rejected,
        // the far root is the exit point.
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let hollow = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            -0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )
        .unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = hollow.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        // Same roots as the positive sphere, but the normal points inward
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let result = Sphere::new(
            Vec3::ZERO,
            0.0,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        );
        assert!(matches!(result, Err(GeometryError::ZeroRadius)));
    }
}
