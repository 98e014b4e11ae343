//! Scene-construction glue: hardcoded and randomly generated sphere lists.

use crate::material::{Color, Dielectric, Lambertian, Metal};
use crate::sphere::{GeometryError, Sphere};
use crate::{gen_f32, HittableList};
use candela_math::Vec3;
use rand::RngCore;
use std::sync::Arc;

/// The classic four-sphere scene: a matte center sphere, a yellow-green
/// ground sphere, and two metal spheres of very different roughness.
pub fn classic_scene() -> Result<HittableList, GeometryError> {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Arc::new(Lambertian::new(Color::new(0.8, 0.3, 0.3))),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.9)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.01)),
    )?));

    Ok(world)
}

/// A random sphere field: ground, three hero spheres, and a jittered grid
/// of small spheres with randomly chosen materials.
pub fn random_scene(rng: &mut dyn RngCore) -> Result<HittableList, GeometryError> {
    let mut world = HittableList::new();

    // Ground
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
    )?));

    // Three hero spheres
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )?));

    // Small random spheres, skipping positions too close to the metal hero
    for a in -5..5 {
        for b in -5..5 {
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat = gen_f32(rng);
            if choose_mat < 0.8 {
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Lambertian::new(albedo)),
                )?));
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    0.5 + 0.5 * gen_f32(rng),
                    0.5 + 0.5 * gen_f32(rng),
                    0.5 + 0.5 * gen_f32(rng),
                );
                let fuzz = 0.5 * gen_f32(rng);
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )?));
            } else {
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Dielectric::new(1.5)),
                )?));
            }
        }
    }

    Ok(world)
}
