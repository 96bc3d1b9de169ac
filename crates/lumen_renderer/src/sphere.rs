//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};

/// A sphere primitive.
///
/// A negative radius is kept as-is: it flips the outward normal, which
/// turns the sphere into the inner wall of a hollow shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (h + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grey() -> Material {
        Material::smooth(Color::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::SECONDARY).expect("should hit");
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::SECONDARY).is_none());
    }

    #[test]
    fn test_roots_symmetric_about_center_distance() {
        // Direction of length 2: t is measured in half-units of distance
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        let near = sphere.hit(&ray, Interval::FORWARD).expect("near root");
        let far = sphere.hit(&ray, Interval::new(2.5, f32::INFINITY)).expect("far root");

        let center_t = 5.0 / 2.0;
        let half_chord = 1.0 / 2.0;
        assert!((near.t - (center_t - half_chord)).abs() < 1e-5);
        assert!((far.t - (center_t + half_chord)).abs() < 1e-5);

        // Leaving through the far wall is a back-face hit
        assert!(!far.front_face);
        assert!((far.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_root_outside_interval() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::new(0.0, 3.9)).is_none());
        assert!(sphere.hit(&ray, Interval::new(6.1, 100.0)).is_none());

        // Interval bounds are inclusive
        let rec = sphere.hit(&ray, Interval::new(0.0, 4.0)).expect("hit on the bound");
        assert_eq!(rec.t, 4.0);
    }

    #[test]
    fn test_negative_radius_inverts_normal() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), -1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.hit(&ray, Interval::FORWARD).expect("should hit");
        assert!((rec.t - 4.0).abs() < 1e-5);
        // Outward normal points into the sphere, so the outside reads as a back face
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_normals_are_unit_and_face_the_ray() {
        let spheres = [
            Sphere::new(Vec3::new(0.3, -0.2, -2.0), 0.75, grey()),
            Sphere::new(Vec3::new(0.3, -0.2, -2.0), -0.75, grey()),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = 0;

        for sphere in &spheres {
            for _ in 0..500 {
                // Origins both outside and inside the sphere
                let origin = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-2.5..0.5),
                );
                let direction = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-3.0..1.0),
                ) * rng.gen_range(0.1f32..4.0);
                let ray = Ray::new(origin, direction);

                if let Some(rec) = sphere.hit(&ray, Interval::SECONDARY) {
                    hits += 1;
                    assert!((rec.normal.length() - 1.0).abs() < 1e-4);
                    assert!(direction.dot(rec.normal) <= 0.0);
                }
            }
        }

        assert!(hits > 0);
    }
}
