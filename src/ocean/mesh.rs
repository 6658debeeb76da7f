//! Flat surface grid displaced on the GPU by the wave uniform block.

use bytemuck::{Pod, Zeroable};

use crate::error::OceanError;
use crate::params::{MeshConfig, MeshTechnique};

/// Vertex data for the surface mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Corner offsets (in quads) for the two triangles of one quad, CCW seen from +Y
const TRIANGLE_CORNERS: [(usize, usize); 6] = [(0, 0), (0, 1), (1, 1), (0, 0), (1, 1), (1, 0)];

/// Corner offsets for one tessellation control patch
const PATCH_CORNERS: [(usize, usize); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Flat XZ grid centered at the origin
///
/// Vertices are undisplaced; the GPU applies the wave field per vertex (or per
/// tessellated sample) using the same wave rows the CPU solver reads.
pub struct SurfaceMesh {
    pub vertices: Vec<Vertex>,
    config: MeshConfig,
    /// Bumped on every rebuild so uploaders can tell stale buffers apart
    generation: u64,
}

impl SurfaceMesh {
    /// Build a mesh for a validated configuration
    pub fn new(config: MeshConfig) -> Result<Self, OceanError> {
        config.validate()?;
        Ok(Self {
            vertices: build_vertices(&config),
            config,
            generation: 0,
        })
    }

    pub fn config(&self) -> MeshConfig {
        self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Vertices to draw in one call; validation keeps this within `u32`
    pub fn draw_count(&self) -> u32 {
        u32::try_from(self.vertices.len()).unwrap_or(u32::MAX)
    }

    /// Triangles or patches to draw
    pub fn primitive_count(&self) -> usize {
        match self.config.technique {
            MeshTechnique::Triangles => self.config.total_quads() * 2,
            MeshTechnique::Patches => self.config.total_quads(),
        }
    }

    /// Replace the configuration, rebuilding only if it actually changed
    ///
    /// Returns whether a rebuild happened. Invalid configurations are
    /// rejected and leave the current mesh untouched.
    pub fn set_config(&mut self, config: MeshConfig) -> Result<bool, OceanError> {
        config.validate()?;
        if config == self.config {
            return Ok(false);
        }

        self.vertices = build_vertices(&config);
        self.config = config;
        self.generation += 1;

        log::info!(
            "Rebuilt surface mesh: {} quads per side, {} vertices ({:?})",
            config.quads_per_side(),
            self.vertices.len(),
            config.technique
        );
        Ok(true)
    }
}

fn build_vertices(config: &MeshConfig) -> Vec<Vertex> {
    let quads = config.quads_per_side();
    let spacing = config.resolution_m;
    // Center the covered span, which is shorter than the extent when it does not divide evenly
    let half_size = quads as f32 * spacing / 2.0;

    let corners: &[(usize, usize)] = match config.technique {
        MeshTechnique::Triangles => &TRIANGLE_CORNERS,
        MeshTechnique::Patches => &PATCH_CORNERS,
    };

    let mut vertices = Vec::with_capacity(config.vertex_count());
    for x in 0..quads {
        for z in 0..quads {
            for &(dx, dz) in corners {
                let gx = x + dx;
                let gz = z + dz;
                vertices.push(Vertex {
                    position: [
                        gx as f32 * spacing - half_size,
                        0.0,
                        gz as f32 * spacing - half_size,
                    ],
                    uv: [gx as f32 / quads as f32, gz as f32 / quads as f32],
                });
            }
        }
    }
    vertices
}
