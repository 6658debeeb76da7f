//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Physical units (meters, seconds, radians per second)
//! - Documented ranges and meanings
//! - `Default` values matching the authored ocean

mod camera;
mod mesh;
mod ocean;
mod render;

// Re-export all types
pub use camera::{CameraPreset, DriftCamera, FixedCamera, FloatingParams};
pub use mesh::{MeshConfig, MeshTechnique};
pub use ocean::{WaveGeneration, DEFAULT_WAVE_SEED, MAX_WAVES};
pub use render::RenderConfig;
