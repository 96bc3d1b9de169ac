//! Core path tracing and pixel output.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounce budget
//! - Separate probe counts for the first hit and for deeper bounces
//! - Gamma correction and 8-bit quantization into an RGBA buffer

use crate::error::{RenderError, RenderResult};
use crate::{Color, Hittable, Ray, RenderOptions, Scene};
use image::RgbaImage;
use lumen_math::Interval;
use rand::RngCore;

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. On a hit it fires a batch of
/// probes, follows each scattered ray with one less bounce, and averages
/// what comes back. Rays that escape see the sky.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    ray_t: Interval,
    depth: u32,
    options: &RenderOptions,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = scene.hit(ray, ray_t) else {
        return sky_gradient(ray);
    };

    // Bounce budget exhausted: truncate rather than estimate
    if depth <= 1 {
        return Color::ZERO;
    }

    let probes = if depth == options.max_depth {
        options.diffuse_rays_probes
    } else {
        options.diffuse_second_rays_probes
    };
    if probes == 0 {
        return Color::ZERO;
    }

    let diffuse = options.diffuse_sampling();
    let mut accumulated = Color::ZERO;

    for _ in 0..probes {
        // Absorbed probes add nothing but still count in the average
        if let Some(result) = rec.material.scatter(ray, &rec, diffuse, rng) {
            let traced = ray_color(
                &result.scattered,
                scene,
                Interval::SECONDARY,
                depth - 1,
                options,
                rng,
            );
            accumulated += result.attenuation * traced;
        }
    }

    accumulated / probes as f32
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Convert a linear color to 8-bit RGBA.
///
/// Channels are not clamped first. The float-to-byte cast saturates, so
/// values above 1 end at 255 and negative or NaN values at 0.
pub fn color_to_rgba(color: Color, gamma: f32) -> [u8; 4] {
    let color = if gamma != 1.0 {
        color.powf(1.0 / gamma)
    } else {
        color
    };

    let r = (255.999 * color.x).floor() as u8;
    let g = (255.999 * color.y).floor() as u8;
    let b = (255.999 * color.z).floor() as u8;
    [r, g, b, 255]
}

/// Row-major RGBA8 pixel buffer the renderer draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer with every byte zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap existing RGBA bytes, e.g. a display surface's backing store.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer sized for the given options.
    pub fn for_options(options: &RenderOptions) -> Self {
        Self::new(options.width, options.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Get the RGBA bytes at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[offset..offset + 4]);
        Some(rgba)
    }

    /// Read a written pixel back as a color, each channel `byte / 256`.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        let [r, g, b, _] = self.pixel(x, y)?;
        Some(Color::new(r as f32, g as f32, b as f32) / 256.0)
    }

    /// Gamma-correct, quantize and store a color. Writes outside the image are dropped.
    pub fn write_color(&mut self, x: u32, y: u32, color: Color, gamma: f32) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + 4].copy_from_slice(&color_to_rgba(color, gamma));
        }
    }

    /// Convert to an `image` buffer (for saving to disk).
    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data)
    }
}
