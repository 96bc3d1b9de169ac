//! Random sampling helpers.
//!
//! All randomness flows through an injected `&mut dyn RngCore`, so a seeded
//! generator makes a whole render reproducible.

use lumen_math::Vec3;
use rand::{Rng, RngCore};

/// Distribution diffuse surfaces draw their bounce perturbation from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffuseSampling {
    /// Uniform inside the unit ball (cheap approximation)
    InUnitBall,
    /// Uniform on the unit sphere surface (true Lambertian)
    OnUnitSphere,
}

impl DiffuseSampling {
    /// Draw one perturbation vector.
    pub fn sample(self, rng: &mut dyn RngCore) -> Vec3 {
        match self {
            DiffuseSampling::InUnitBall => random_in_unit_sphere(rng),
            DiffuseSampling::OnUnitSphere => random_on_unit_sphere(rng),
        }
    }
}

/// Uniform float in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point strictly inside the unit ball, by rejection sampling.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point on the unit sphere surface.
pub fn random_on_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_sphere(rng).normalize()
}
