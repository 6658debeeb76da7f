//! World-facing ocean facade.

use glam::Vec3;

use super::field::{evaluate, WaveSample};
use super::mesh::SurfaceMesh;
use super::solver::SurfaceSolver;
use super::waves::{WaveParameterSet, WaveProperty, WaveUniforms};
use super::SurfacePoint;
use crate::error::OceanError;
use crate::params::{MeshConfig, WaveGeneration};

/// Read-only surface queries
///
/// Floating objects and cameras hold this capability instead of the owning
/// `OceanSystem`, so they never outlive or mutate the wave field.
pub trait SurfaceQuery {
    /// Surface point directly above or below `xz` (its y is ignored)
    fn surface_at(&self, xz: Vec3, time: f32) -> SurfacePoint;

    /// Whether `point` lies below the surface at its horizontal location
    fn is_submerged(&self, point: Vec3, time: f32) -> bool {
        self.surface_at(point, time).position.y > point.y
    }
}

/// Ocean state owned by the world: wave set, surface mesh and solver
///
/// All mutation happens between frames through the setters below; queries
/// are pure and can run any number of times per frame.
pub struct OceanSystem {
    waves: WaveParameterSet,
    mesh: SurfaceMesh,
    solver: SurfaceSolver,
}

impl OceanSystem {
    /// Generate waves and build the surface mesh
    pub fn new(generation: &WaveGeneration, mesh: MeshConfig) -> Result<Self, OceanError> {
        let waves = WaveParameterSet::generate(generation)?;
        Self::with_waves(waves, mesh)
    }

    /// Use an explicit wave set
    pub fn with_waves(waves: WaveParameterSet, mesh: MeshConfig) -> Result<Self, OceanError> {
        Ok(Self {
            waves,
            mesh: SurfaceMesh::new(mesh)?,
            solver: SurfaceSolver::default(),
        })
    }

    /// Replace the inverse solver (iteration budget)
    pub fn with_solver(mut self, solver: SurfaceSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn waves(&self) -> &WaveParameterSet {
        &self.waves
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    pub fn solver(&self) -> SurfaceSolver {
        self.solver
    }

    pub fn mesh_config(&self) -> MeshConfig {
        self.mesh.config()
    }

    /// Resize the surface mesh; a no-op when nothing changed
    pub fn set_mesh_config(&mut self, config: MeshConfig) -> Result<bool, OceanError> {
        self.mesh.set_config(config).inspect_err(|err| {
            log::warn!("Rejected mesh config {:?}: {}", config, err);
        })
    }

    /// Edit one wave in place
    ///
    /// The mesh is unaffected: displacement happens per frame from the
    /// uniform block, so the edit shows up in the next upload and query.
    pub fn set_wave_parameter(
        &mut self,
        index: usize,
        property: WaveProperty,
        value: f32,
    ) -> Result<(), OceanError> {
        self.waves.edit(index, property, value).inspect_err(|err| {
            log::warn!("Rejected wave edit {}[{}] = {}: {}", property, index, value, err);
        })?;
        log::debug!("Wave {} {} set to {}", index, property, value);
        Ok(())
    }

    /// Discard all edits and synthesize a fresh wave set
    pub fn regenerate_waves(&mut self, generation: &WaveGeneration) -> Result<(), OceanError> {
        self.waves = WaveParameterSet::generate(generation)?;
        Ok(())
    }

    /// Forward evaluation at an undisplaced location
    pub fn evaluate(&self, base: Vec3, time: f32) -> WaveSample {
        evaluate(base, time, self.waves.as_slice())
    }

    /// Uniform block for this frame
    pub fn wave_uniforms(&self, time: f32) -> WaveUniforms {
        self.waves.to_uniforms(time)
    }
}

impl SurfaceQuery for OceanSystem {
    fn surface_at(&self, xz: Vec3, time: f32) -> SurfacePoint {
        self.solver.solve(xz, time, self.waves.as_slice())
    }
}
