//! Surface materials and how they scatter light.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere, DiffuseSampling};
use crate::Ray;
use lumen_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Multiplied component-wise into the color traced along `scattered`
    pub attenuation: Color,
    /// Continuation ray, starting at the hit point
    pub scattered: Ray,
}

/// The closed set of surface materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse reflector.
    Smooth { color: Color },
    /// Specular reflector; `fuzz` jitters the mirror direction (0 = perfect mirror).
    Metal { color: Color, fuzz: f32 },
    /// Glass-like surface that refracts or reflects.
    ///
    /// `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    Dielectric { color: Color, refraction_index: f32 },
}

impl Material {
    pub fn smooth(color: Color) -> Self {
        Material::Smooth { color }
    }

    pub fn metal(color: Color, fuzz: f32) -> Self {
        Material::Metal { color, fuzz }
    }

    pub fn dielectric(color: Color, refraction_index: f32) -> Self {
        Material::Dielectric {
            color,
            refraction_index,
        }
    }

    /// Flat attenuation color of the material.
    pub fn color(&self) -> Color {
        match *self {
            Material::Smooth { color }
            | Material::Metal { color, .. }
            | Material::Dielectric { color, .. } => color,
        }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` when the ray is absorbed. Only metal absorbs: a fuzzed
    /// reflection that ends up below the surface contributes nothing.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        diffuse: DiffuseSampling,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let direction = match *self {
            Material::Smooth { .. } => {
                let direction = rec.normal + diffuse.sample(rng);

                // Catch degenerate scatter direction
                if near_zero(direction) {
                    rec.normal
                } else {
                    direction
                }
            }
            Material::Metal { fuzz, .. } => {
                let mut direction = reflect(ray_in.direction().normalize(), rec.normal);
                if fuzz > 0.0 {
                    direction += fuzz * random_in_unit_sphere(rng);
                }

                if direction.dot(rec.normal) <= 0.0 {
                    return None;
                }
                direction
            }
            Material::Dielectric {
                refraction_index, ..
            } => {
                let refraction_ratio = if rec.front_face {
                    1.0 / refraction_index
                } else {
                    refraction_index
                };

                let unit_direction = ray_in.direction().normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Total internal reflection never consumes a random draw
                let cannot_refract = refraction_ratio * sin_theta > 1.0;

                if cannot_refract || reflectance(cos_theta, refraction_ratio) > gen_f32(rng) {
                    reflect(unit_direction, rec.normal)
                } else {
                    refract(unit_direction, cos_theta, rec.normal, refraction_ratio)
                }
            }
        };

        Some(ScatterResult {
            attenuation: self.color(),
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface.
///
/// `cos_theta` is the cosine between `-uv` and `n`, already computed by the caller.
#[inline]
pub fn refract(uv: Vec3, cos_theta: f32, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation for reflectance.
#[inline]
pub fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// True when every component is below 1e-8 in magnitude.
#[inline]
fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < 1e-8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Sphere};
    use lumen_math::Interval;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every `gen_f32` draw returns just under 1.0.
    fn high_draws() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Every `gen_f32` draw returns 0.0.
    fn low_draws() -> StepRng {
        StepRng::new(0, 0)
    }

    fn hit_sphere<'a>(sphere: &'a Sphere, ray: &Ray) -> HitRecord<'a> {
        sphere.hit(ray, Interval::FORWARD).expect("ray should hit sphere")
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflectance_normal_incidence() {
        // r0 for glass entered from air: ((1 - 1/1.5) / (1 + 1/1.5))^2 = 0.04
        assert!((reflectance(1.0, 1.0 / 1.5) - 0.04).abs() < 1e-5);
        // Grazing incidence reflects everything
        assert!((reflectance(0.0, 1.0 / 1.5) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::splat(1e-9)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-7, 0.0)));
    }

    #[test]
    fn test_smooth_scatter_leaves_surface() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::smooth(Color::splat(0.5)));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = hit_sphere(&sphere, &ray);
        let mut rng = StdRng::seed_from_u64(11);

        for sampling in [DiffuseSampling::InUnitBall, DiffuseSampling::OnUnitSphere] {
            for _ in 0..200 {
                let result = rec
                    .material
                    .scatter(&ray, &rec, sampling, &mut rng)
                    .expect("diffuse never absorbs");
                assert_eq!(result.attenuation, Color::splat(0.5));
                assert_eq!(result.scattered.origin, rec.p);
                // normal + point in the unit ball stays within one unit of the normal tip
                assert!((result.scattered.direction - rec.normal).length() <= 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_metal_without_fuzz_mirrors_exactly() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Material::metal(Color::new(0.8, 0.6, 0.2), 0.0),
        );
        // Strike the top pole from above
        let ray = Ray::new(Vec3::new(0.0, 2.0, -1.0), Vec3::new(0.0, -3.0, 0.0));
        let rec = hit_sphere(&sphere, &ray);
        assert!((rec.normal - Vec3::Y).length() < 1e-6);

        // No random draws are needed, a stepping source is enough
        let result = rec
            .material
            .scatter(&ray, &rec, DiffuseSampling::InUnitBall, &mut low_draws())
            .expect("mirror reflection leaves the surface");

        let expected = reflect(ray.direction().normalize(), rec.normal);
        assert_eq!(result.scattered.direction, expected);
        assert_eq!(result.attenuation, Color::new(0.8, 0.6, 0.2));
    }

    #[test]
    fn test_fuzzy_metal_absorbs_grazing_rays() {
        let material = Material::metal(Color::ONE, 1.0);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, material);
        // Nearly tangent to the top of the sphere
        let ray = Ray::new(Vec3::new(-2.0, 0.499, -1.0), Vec3::X);
        let rec = hit_sphere(&sphere, &ray);
        let mut rng = StdRng::seed_from_u64(5);

        let mut absorbed = 0;
        for _ in 0..200 {
            match rec.material.scatter(&ray, &rec, DiffuseSampling::InUnitBall, &mut rng) {
                Some(result) => assert!(result.scattered.direction.dot(rec.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn test_dielectric_refracts_at_normal_incidence() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Material::dielectric(Color::ONE, 1.5),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = hit_sphere(&sphere, &ray);
        assert!(rec.front_face);

        let result = rec
            .material
            .scatter(&ray, &rec, DiffuseSampling::InUnitBall, &mut high_draws())
            .expect("glass never absorbs");

        // Straight through, no bending at normal incidence
        assert!((result.scattered.direction - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(result.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_reflects_on_low_draw() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Material::dielectric(Color::ONE, 1.5),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = hit_sphere(&sphere, &ray);

        // A draw of 0.0 falls under the ~0.04 Schlick reflectance
        let result = rec
            .material
            .scatter(&ray, &rec, DiffuseSampling::InUnitBall, &mut low_draws())
            .expect("glass never absorbs");
        assert!((result.scattered.direction - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Material::dielectric(Color::ONE, 1.5));
        // From inside the glass towards the wall at a steep angle
        let ray = Ray::new(Vec3::new(0.8, 0.0, 0.0), Vec3::NEG_Z);
        let rec = hit_sphere(&sphere, &ray);
        assert!(!rec.front_face);

        // sin(theta) = 0.8 and 1.5 * 0.8 > 1, so even a high draw must reflect
        let result = rec
            .material
            .scatter(&ray, &rec, DiffuseSampling::InUnitBall, &mut high_draws())
            .expect("glass never absorbs");
        let expected = Vec3::new(-0.96, 0.0, -0.28);
        assert!((result.scattered.direction - expected).length() < 1e-4);
    }
}
