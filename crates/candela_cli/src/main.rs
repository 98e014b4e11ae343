use anyhow::{Context, Result};
use candela_render::{classic_scene, render, save_png, save_ppm, Camera, RenderConfig, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

// Construction-time configuration; the renderer has no CLI flags.
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 400;
const SAMPLES_PER_PIXEL: u32 = 100;
const MAX_DEPTH: u32 = 50;
const SEED: u64 = 0;

const OUTPUT_PPM: &str = "render.ppm";
const OUTPUT_PNG: &str = "render.png";

fn main() -> Result<()> {
    env_logger::init();

    let world = classic_scene()?;
    log::info!("scene built: {} objects", world.len());

    let camera = Camera::new(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        90.0,
        IMAGE_WIDTH as f32 / IMAGE_HEIGHT as f32,
        0.0, // pinhole
        1.0,
    );

    let config = RenderConfig {
        image_width: IMAGE_WIDTH,
        image_height: IMAGE_HEIGHT,
        samples_per_pixel: SAMPLES_PER_PIXEL,
        max_depth: MAX_DEPTH,
    };

    log::info!(
        "rendering {}x{} @ {} spp, depth {}",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth
    );

    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(SEED);
    let image = render(&camera, &world, &config, &mut rng);
    log::info!("rendered in {:.2?}", start.elapsed());

    save_ppm(&image, OUTPUT_PPM).with_context(|| format!("writing {OUTPUT_PPM}"))?;
    save_png(&image, OUTPUT_PNG).with_context(|| format!("writing {OUTPUT_PNG}"))?;
    log::info!("saved {OUTPUT_PPM} and {OUTPUT_PNG}");

    Ok(())
}
