//! Surface mesh sizing.

use crate::error::OceanError;

/// How the flat surface grid is handed to the GPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MeshTechnique {
    /// Pre-subdivided triangle list, two triangles per quad
    Triangles,

    /// Coarse four-vertex control patches for hardware tessellation
    #[default]
    Patches,
}

impl MeshTechnique {
    /// Vertices emitted for each grid quad
    pub fn vertices_per_quad(self) -> usize {
        match self {
            Self::Triangles => 6,
            Self::Patches => 4,
        }
    }
}

/// World-space sizing of the surface mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Side length of the square surface (meters)
    pub extent_m: f32,

    /// Edge length of one grid quad (meters)
    pub resolution_m: f32,

    /// Triangles or tessellation patches
    pub technique: MeshTechnique,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            extent_m: 1000.0,
            // Patches are subdivided on the GPU, so the control grid stays coarse
            resolution_m: 10.0,
            technique: MeshTechnique::Patches,
        }
    }
}

impl MeshConfig {
    pub fn new(extent_m: f32, resolution_m: f32, technique: MeshTechnique) -> Self {
        Self {
            extent_m,
            resolution_m,
            technique,
        }
    }

    /// Reject sizes that would divide by zero, produce an empty grid or
    /// overflow a `u32` draw count
    pub fn validate(&self) -> Result<(), OceanError> {
        if !self.extent_m.is_finite() || self.extent_m <= 0.0 {
            return Err(OceanError::InvalidExtent(self.extent_m));
        }
        if !self.resolution_m.is_finite() || self.resolution_m <= 0.0 {
            return Err(OceanError::InvalidResolution(self.resolution_m));
        }
        if self.quads_per_side() == 0 {
            return Err(OceanError::EmptyMesh {
                extent: self.extent_m,
                resolution: self.resolution_m,
            });
        }
        if self.checked_vertex_count().is_none() {
            return Err(OceanError::MeshTooLarge {
                extent: self.extent_m,
                resolution: self.resolution_m,
            });
        }
        Ok(())
    }

    /// `floor(extent / resolution)`; the remainder is discarded
    pub fn quads_per_side(&self) -> usize {
        (self.extent_m / self.resolution_m).floor() as usize
    }

    pub fn total_quads(&self) -> usize {
        self.quads_per_side().saturating_pow(2)
    }

    /// Saturates for oversized configurations, which `validate` rejects
    pub fn vertex_count(&self) -> usize {
        self.checked_vertex_count().unwrap_or(usize::MAX)
    }

    /// Vertex count if it is addressable by a single `u32` draw call
    pub fn checked_vertex_count(&self) -> Option<usize> {
        let quads = self.quads_per_side();
        quads
            .checked_mul(quads)?
            .checked_mul(self.technique.vertices_per_quad())
            .filter(|&count| u32::try_from(count).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quads_per_side_floors() {
        let even = MeshConfig::new(10.0, 1.0, MeshTechnique::Triangles);
        assert_eq!(even.quads_per_side(), 10);
        assert_eq!(even.total_quads(), 100);
        assert_eq!(even.vertex_count(), 600);

        let uneven = MeshConfig::new(10.0, 3.0, MeshTechnique::Patches);
        assert_eq!(uneven.quads_per_side(), 3);
        assert_eq!(uneven.vertex_count(), 9 * 4);
    }

    #[test]
    fn test_validation() {
        assert!(MeshConfig::default().validate().is_ok());
        assert!(matches!(
            MeshConfig::new(0.0, 1.0, MeshTechnique::Triangles).validate(),
            Err(OceanError::InvalidExtent(_))
        ));
        assert!(matches!(
            MeshConfig::new(10.0, -1.0, MeshTechnique::Triangles).validate(),
            Err(OceanError::InvalidResolution(_))
        ));
        assert!(matches!(
            MeshConfig::new(10.0, f32::NAN, MeshTechnique::Triangles).validate(),
            Err(OceanError::InvalidResolution(_))
        ));
        assert!(matches!(
            MeshConfig::new(2.0, 5.0, MeshTechnique::Triangles).validate(),
            Err(OceanError::EmptyMesh { .. })
        ));
    }

    #[test]
    fn test_oversized_mesh_rejected() {
        let huge = MeshConfig::new(1.0e10, 1.0, MeshTechnique::Triangles);
        assert_eq!(huge.checked_vertex_count(), None);
        assert!(matches!(huge.validate(), Err(OceanError::MeshTooLarge { .. })));

        // 26_754 quads per side is the last triangle grid under u32::MAX vertices
        let edge = MeshConfig::new(26_754.0, 1.0, MeshTechnique::Triangles);
        assert!(edge.validate().is_ok());
        assert_eq!(edge.checked_vertex_count(), Some(26_754 * 26_754 * 6));
        let over = MeshConfig::new(26_755.0, 1.0, MeshTechnique::Triangles);
        assert!(matches!(over.validate(), Err(OceanError::MeshTooLarge { .. })));

        // Patches use fewer vertices per quad, so the same grid still fits
        let patches = MeshConfig::new(26_755.0, 1.0, MeshTechnique::Patches);
        assert!(patches.validate().is_ok());
    }
}
