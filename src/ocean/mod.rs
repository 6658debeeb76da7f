//! Gerstner wave field: synthesis, forward evaluation, inverse queries and
//! the surface mesh that carries it to the GPU.

mod clock;
pub mod field;
mod mesh;
mod solver;
mod system;
mod waves;

// Re-export public types
pub use clock::SimulationClock;
pub use field::{evaluate, WaveSample};
pub use mesh::{SurfaceMesh, Vertex};
pub use solver::{SurfaceSolver, DEFAULT_SOLVER_ITERATIONS};
pub use system::{OceanSystem, SurfaceQuery};
pub use waves::{WaveParameter, WaveParameterSet, WaveProperty, WaveUniforms};

use glam::Vec3;

/// Point on the displaced surface with its unit normal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}
