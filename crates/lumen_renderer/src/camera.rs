//! Camera for ray generation.

use crate::Ray;
use lumen_math::Vec3;

/// Viewport height in world units.
const VIEWPORT_HEIGHT: f32 = 2.0;
/// Distance from the eye to the viewport plane.
const FOCAL_LENGTH: f32 = 1.0;

/// Fixed pinhole camera at the origin looking down -Z.
///
/// The viewport is two units tall and stretched horizontally to the
/// image aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    image_width: f32,
    image_height: f32,
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let aspect_ratio = image_width as f32 / image_height as f32;
        let viewport_width = aspect_ratio * VIEWPORT_HEIGHT;

        let origin = Vec3::ZERO;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, VIEWPORT_HEIGHT, 0.0);
        let lower_left_corner =
            origin - Vec3::new(viewport_width / 2.0, VIEWPORT_HEIGHT / 2.0, FOCAL_LENGTH);

        Self {
            image_width: image_width as f32,
            image_height: image_height as f32,
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Generate the ray through continuous pixel coordinates `(x, y)`.
    ///
    /// `(0, 0)` is the top-left image corner; `(x + 0.5, y + 0.5)` is the
    /// center of pixel `(x, y)`. The direction is left unnormalized.
    pub fn get_ray(&self, x: f32, y: f32) -> Ray {
        let u = x / self.image_width;
        let v = 1.0 - y / self.image_height;

        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(self.origin, direction)
    }
}
