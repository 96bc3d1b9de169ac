//! Render options supplied by the host.
//!
//! Field names serialize in camelCase so a control panel can hand over
//! partial JSON (`{"diffThreshold": 0.5}`) and keep defaults for the rest.

use crate::error::{RenderError, RenderResult};
use crate::sampling::DiffuseSampling;
use serde::{Deserialize, Serialize};

/// Upper bound on `max_depth` accepted by [`RenderOptions::validate`].
///
/// Tracing recurses once per bounce, so this also bounds stack depth.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Parameters for one adaptive render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Render resolution in pixels
    pub width: u32,
    pub height: u32,
    /// Display magnification; the host renders at `display / zoom`
    pub zoom: f32,
    /// Neighbor color distance above which a 2x2 block is resampled
    pub diff_threshold: f32,
    /// How far refined sub-pixels are pulled toward their block average (0-1)
    pub avg_mixer: f32,
    /// Paint refined blocks red after the pass
    pub highlight_diff: bool,
    /// Output gamma; 1.0 writes linear values
    pub gamma: f32,
    /// Bounce budget for primary rays
    pub max_depth: u32,
    /// Diffuse scatter on the unit sphere surface instead of inside the ball
    pub use_true_lambertian: bool,
    /// Probes fired from the first surface a primary ray hits
    pub diffuse_rays_probes: u32,
    /// Probes fired from every deeper bounce
    pub diffuse_second_rays_probes: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            zoom: 1.0,
            diff_threshold: 0.25,
            avg_mixer: 0.45,
            highlight_diff: false,
            gamma: 1.0,
            max_depth: 10,
            use_true_lambertian: false,
            diffuse_rays_probes: 10,
            diffuse_second_rays_probes: 1,
        }
    }
}

impl RenderOptions {
    /// Set render resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Which distribution diffuse surfaces sample their bounce from.
    pub fn diffuse_sampling(&self) -> DiffuseSampling {
        if self.use_true_lambertian {
            DiffuseSampling::OnUnitSphere
        } else {
            DiffuseSampling::InUnitBall
        }
    }

    /// Render resolution for a display surface of the given size.
    ///
    /// Each axis is `floor(display / 2 / zoom) * 2`, so both are even and
    /// every 2x2 block lies fully inside the image.
    pub fn zoomed_resolution(&self, display_width: u32, display_height: u32) -> (u32, u32) {
        let scale = |display: u32| ((display as f32 / 2.0 / self.zoom).floor() as u32) * 2;
        (scale(display_width), scale(display_height))
    }

    /// Check the options a host is about to render with.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(invalid("zoom", format!("must be positive, got {}", self.zoom)));
        }

        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(invalid("gamma", format!("must be positive, got {}", self.gamma)));
        }

        if !(0.0..=1.0).contains(&self.avg_mixer) {
            return Err(invalid(
                "avgMixer",
                format!("must be within [0, 1], got {}", self.avg_mixer),
            ));
        }

        if self.diff_threshold.is_nan() || self.diff_threshold < 0.0 {
            return Err(invalid(
                "diffThreshold",
                format!("must be non-negative, got {}", self.diff_threshold),
            ));
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(invalid(
                "maxDepth",
                format!("must be at most {}, got {}", MAX_DEPTH_LIMIT, self.max_depth),
            ));
        }

        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> RenderError {
    RenderError::InvalidOption { name, reason }
}
