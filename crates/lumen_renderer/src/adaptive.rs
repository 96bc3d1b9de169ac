//! Adaptive block sampling driver.
//!
//! Every 2x2 block first gets one cheap sample at its center. The sample
//! is compared against the already written pixel above the block's top
//! right corner and the one left of its top left corner. Blocks that
//! differ by more than `diff_threshold` get a full sample per sub-pixel,
//! smoothed toward their average; the rest reuse the center sample.

use crate::block::{generate_blocks, Block, BLOCK_SIZE};
use crate::renderer::{ray_color, PixelBuffer};
use crate::{Camera, Color, RenderOptions, Scene};
use lumen_math::Interval;
use rand::RngCore;
use std::fmt;
use std::time::Instant;

/// Overlay color for refined blocks when `highlight_diff` is set.
const HIGHLIGHT: Color = Color::new(1.0, 0.0, 0.0);

/// Block counts from one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    /// Blocks processed
    pub blocks: usize,
    /// Blocks that took the per-sub-pixel path
    pub refined_blocks: usize,
}

impl RenderStats {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Percentage of blocks that were refined.
    pub fn refined_ratio(&self) -> f32 {
        if self.blocks == 0 {
            0.0
        } else {
            self.refined_blocks as f32 * 100.0 / self.blocks as f32
        }
    }

    /// Pixels' worth of shading work: one per flat block, four per refined block.
    pub fn effective_pixels(&self) -> usize {
        self.blocks - self.refined_blocks + self.refined_blocks * 4
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "renderResolution={}x{} blocks={} refined={} refinedRatio={:.2}% effectivePixels={}",
            self.width,
            self.height,
            self.blocks,
            self.refined_blocks,
            self.refined_ratio(),
            self.effective_pixels()
        )
    }
}

/// Render the scene into `buffer`.
///
/// The whole frame is redrawn; the buffer is only meaningful once this
/// returns. Diagnostics go to the log.
pub fn render(buffer: &mut PixelBuffer, options: &RenderOptions, scene: &Scene, rng: &mut dyn RngCore) {
    render_with_stats(buffer, options, scene, rng);
}

/// Same pass as [`render`], also handing back the block counts.
pub fn render_with_stats(
    buffer: &mut PixelBuffer,
    options: &RenderOptions,
    scene: &Scene,
    rng: &mut dyn RngCore,
) -> RenderStats {
    let start = Instant::now();
    let (width, height) = (buffer.width(), buffer.height());

    if (width, height) != (options.width, options.height) {
        log::warn!(
            "Options ask for {}x{} but the buffer is {}x{}; rendering at buffer size",
            options.width,
            options.height,
            width,
            height
        );
    }

    let camera = Camera::new(width, height);
    let mut stats = RenderStats::new(width, height);
    let mut highlighted = Vec::new();

    // Row-major: the neighbor check reads pixels written by earlier blocks
    for block in generate_blocks(width, height, BLOCK_SIZE) {
        let (cx, cy) = block.center();
        let center = trace_pixel(&camera, scene, options, cx, cy, rng);

        if neighbor_difference(buffer, &block, center) > options.diff_threshold {
            stats.refined_blocks += 1;
            refine_block(buffer, &block, &camera, scene, options, rng);

            if options.highlight_diff {
                highlighted.push(block);
            }
        } else {
            for (x, y) in block_pixels(&block) {
                buffer.write_color(x, y, center, options.gamma);
            }
        }

        stats.blocks += 1;
    }

    for block in &highlighted {
        for (x, y) in block_pixels(block) {
            buffer.write_color(x, y, HIGHLIGHT, options.gamma);
        }
    }

    log::info!("{}", stats);
    log::debug!("Render time {:?}", start.elapsed());

    stats
}

/// Trace one primary ray through continuous image coordinates.
fn trace_pixel(
    camera: &Camera,
    scene: &Scene,
    options: &RenderOptions,
    x: f32,
    y: f32,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(x, y);
    ray_color(&ray, scene, Interval::FORWARD, options.max_depth, options, rng)
}

/// Sum of absolute per-channel differences.
fn color_distance(a: Color, b: Color) -> f32 {
    (a - b).abs().element_sum()
}

/// Distance from `sample` to the written neighbors above and to the left.
///
/// Neighbors outside the image are skipped.
fn neighbor_difference(buffer: &PixelBuffer, block: &Block, sample: Color) -> f32 {
    let mut sum = 0.0;

    if block.y > 0 {
        if let Some(up) = buffer.color_at(block.x + 1, block.y - 1) {
            sum += color_distance(sample, up);
        }
    }

    if block.x > 0 {
        if let Some(left) = buffer.color_at(block.x - 1, block.y) {
            sum += color_distance(sample, left);
        }
    }

    sum
}

/// Sample every sub-pixel and blend each toward the block average.
fn refine_block(
    buffer: &mut PixelBuffer,
    block: &Block,
    camera: &Camera,
    scene: &Scene,
    options: &RenderOptions,
    rng: &mut dyn RngCore,
) {
    let samples: Vec<(u32, u32, Color)> = block_pixels(block)
        .map(|(x, y)| (x, y, trace_pixel(camera, scene, options, x as f32, y as f32, rng)))
        .collect();

    let average = samples.iter().map(|&(_, _, color)| color).sum::<Color>() / samples.len() as f32;

    for (x, y, color) in samples {
        buffer.write_color(x, y, color.lerp(average, options.avg_mixer), options.gamma);
    }
}

/// Pixel coordinates covered by a block, row-major.
fn block_pixels(block: &Block) -> impl Iterator<Item = (u32, u32)> {
    let (x0, width) = (block.x, block.width);
    (block.y..block.y + block.height).flat_map(move |y| (x0..x0 + width).map(move |x| (x, y)))
}
