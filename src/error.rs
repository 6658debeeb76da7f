//! Error types for oceanwave.

use thiserror::Error;

/// Configuration errors raised at the parameter boundary.
///
/// Invalid input is rejected rather than clamped so authoring mistakes
/// surface immediately.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OceanError {
    /// Mesh side length is zero, negative or not finite.
    #[error("mesh extent must be positive and finite, got {0}")]
    InvalidExtent(f32),

    /// Quad edge length is zero, negative or not finite.
    #[error("mesh resolution must be positive and finite, got {0}")]
    InvalidResolution(f32),

    /// Resolution exceeds extent, leaving no whole quad.
    #[error("mesh of extent {extent} at resolution {resolution} has no quads")]
    EmptyMesh {
        /// Requested extent.
        extent: f32,
        /// Requested resolution.
        resolution: f32,
    },

    /// Vertex count does not fit a single `u32` draw call.
    #[error("mesh of extent {extent} at resolution {resolution} needs more than u32::MAX vertices")]
    MeshTooLarge {
        /// Requested extent.
        extent: f32,
        /// Requested resolution.
        resolution: f32,
    },

    /// Wave edit targets an index past the end of the set.
    #[error("wave index {index} out of range for {count} waves")]
    WaveIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of waves in the set.
        count: usize,
    },

    /// More waves requested than the uniform block can hold.
    #[error("{count} waves requested, at most {max} supported")]
    TooManyWaves {
        /// Requested wave count.
        count: usize,
        /// Uniform block capacity.
        max: usize,
    },

    /// Wavelength range is empty, inverted or non-positive.
    #[error("invalid wavelength range [{min}, {max}]")]
    InvalidWavelengthRange {
        /// Shortest wavelength.
        min: f32,
        /// Longest wavelength.
        max: f32,
    },
}

/// Errors acquiring GPU resources.
#[derive(Debug, Error)]
pub enum GpuError {
    /// No adapter matched the request.
    #[error("failed to find suitable GPU adapter")]
    NoAdapter,

    /// Adapter refused to create a device.
    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
