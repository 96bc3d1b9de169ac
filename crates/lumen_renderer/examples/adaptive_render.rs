//! Adaptive path tracer example.
//!
//! Renders the default scene the way an interactive host would and saves
//! the buffer as a PNG.
//!
//! Usage: `cargo run --example adaptive_render -- [options.json] [output.png]`
//!
//! The options file is camelCase JSON; missing fields keep their defaults.
//! Set `LUMEN_SEED` for a reproducible image.

use anyhow::{Context, Result};
use lumen_renderer::{render, PixelBuffer, RenderOptions, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Size of the display surface the render is shown on.
const DISPLAY_WIDTH: u32 = 800;
const DISPLAY_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut options = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read options from {}", path))?;
            serde_json::from_str::<RenderOptions>(&json)
                .with_context(|| format!("Failed to parse options in {}", path))?
        }
        None => RenderOptions::default(),
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    // Zoomed-in displays render fewer pixels and scale them up
    let (width, height) = options.zoomed_resolution(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    options = options.with_resolution(width, height);
    options.validate()?;

    let mut rng = match std::env::var("LUMEN_SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse().context("LUMEN_SEED must be an integer")?),
        Err(_) => StdRng::from_entropy(),
    };

    let scene = Scene::default_scene();
    let mut buffer = PixelBuffer::for_options(&options);

    log::info!(
        "Rendering {}x{} (zoom {}) with {} spheres",
        width,
        height,
        options.zoom,
        scene.len()
    );

    let start = Instant::now();
    render(&mut buffer, &options, &scene, &mut rng);
    log::info!("Rendered in {:?}", start.elapsed());

    let image = buffer
        .into_image()
        .context("Pixel buffer does not match its dimensions")?;
    image
        .save(&output)
        .with_context(|| format!("Failed to save {}", output))?;
    log::info!("Saved to {}", output);

    Ok(())
}
