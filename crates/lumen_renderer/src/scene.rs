//! Scene: an ordered list of spheres, plus the stock scenes.

use crate::{Color, HitRecord, Hittable, Material, Ray, Sphere};
use lumen_math::{Interval, Vec3};

/// An ordered collection of spheres.
///
/// Order matters only for ties: at equal `t` the earlier sphere wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the end of the list.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, sphere: Sphere) -> Self {
        self.add(sphere);
        self
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Ground, a red diffuse ball, a hollow glass ball and a rough gold metal ball.
    pub fn default_scene() -> Self {
        let glass = Material::dielectric(Color::ONE, 1.5);

        Self::new()
            .with(Sphere::new(
                Vec3::new(0.0, -100.6, -1.0),
                100.0,
                Material::smooth(Color::new(0.8, 0.8, 0.0)),
            ))
            .with(Sphere::new(
                Vec3::new(0.0, -0.1, -1.0),
                0.5,
                Material::smooth(Color::new(0.7, 0.3, 0.3)),
            ))
            .with(Sphere::new(Vec3::new(-1.0, -0.1, -1.3), 0.5, glass))
            // Negative radius: inner wall of the glass shell
            .with(Sphere::new(Vec3::new(-1.0, -0.1, -1.3), -0.4, glass))
            .with(Sphere::new(
                Vec3::new(1.0, -0.1, -1.0),
                0.5,
                Material::metal(Color::new(0.8, 0.6, 0.2), 1.0),
            ))
    }

    /// A grey diffuse ball resting on a large grey ground sphere.
    pub fn two_spheres() -> Self {
        let grey = Material::smooth(Color::new(0.5, 0.5, 0.5));

        Self::new()
            .with(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey))
            .with(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, grey))
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut nearest: Option<HitRecord<'a>> = None;

        for sphere in &self.spheres {
            let closest_so_far = nearest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = sphere.hit(ray, ray_t.with_max(closest_so_far)) {
                // The shrunk bound is inclusive; equal t keeps the earlier sphere
                if nearest.map_or(true, |best| rec.t < best.t) {
                    nearest = Some(rec);
                }
            }
        }

        nearest
    }
}
