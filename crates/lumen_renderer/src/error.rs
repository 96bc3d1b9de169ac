//! Errors raised at the boundary between the host and the renderer.
//!
//! The tracing core itself never fails; these cover caller-supplied
//! buffers and options.

use thiserror::Error;

/// Errors that can occur while preparing a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid resolution: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Invalid render option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
