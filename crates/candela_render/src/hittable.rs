//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use candela_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection, unit length.
    ///
    /// Points outward for the geometry that produced it; for a sphere the
    /// sign follows the radius sign.
    pub normal: Vec3,
    /// Material at the intersection point (borrowed, never owned)
    pub material: &'a dyn Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the open parameter interval.
    ///
    /// Roots exactly at `ray_t.min` or `ray_t.max` are rejected.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered list of hittable objects.
///
/// Traversal is a linear scan; order does not affect which hit is
/// returned, only how fast the window shrinks.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Lambertian};
    use crate::sphere::Sphere;
    use std::sync::Arc;

    fn sphere_at(z: f32) -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, z),
            0.25,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )
        .unwrap()
    }

    #[test]
    fn test_closest_hit_wins() {
        let mut list = HittableList::new();
        list.add(Box::new(sphere_at(-2.0)));
        list.add(Box::new(sphere_at(-1.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = list
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("both spheres lie on the ray");

        // Near face of the nearer sphere
        assert!((rec.t - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_closest_hit_order_independent() {
        let mut reversed = HittableList::new();
        reversed.add(Box::new(sphere_at(-1.0)));
        reversed.add(Box::new(sphere_at(-2.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = reversed
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();

        assert!((rec.t - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
        assert!(list.is_empty());
    }
}
