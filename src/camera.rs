//! Preset camera paths and the per-frame underwater flag.

use glam::{Mat4, Vec3};

use crate::ocean::SurfaceQuery;
use crate::params::{CameraPreset, DriftCamera, FixedCamera, RenderConfig};

/// Per-frame camera output consumed by the render loop
#[derive(Debug, Clone, Copy)]
pub struct CameraFrame {
    pub view_proj: Mat4,
    pub eye: Vec3,
    /// Eye is below the wave surface; selects the underwater shading path
    pub underwater: bool,
}

/// Camera system following a preset path
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed_path(params),
            CameraPreset::Drift(params) => Self::compute_drift_path(params, time_s),
        }
    }

    fn compute_fixed_path(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Straight line along +Z at constant altitude
    fn compute_drift_path(p: &DriftCamera, time_s: f32) -> (Vec3, Vec3) {
        let eye = Vec3::new(0.0, p.altitude_m, time_s * p.forward_speed_m_per_s);
        let target = Vec3::new(0.0, p.altitude_m, eye.z + p.look_ahead_m);
        (eye, target)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }

    /// Camera matrices plus submersion against the ocean at the same time
    pub fn frame<Q: SurfaceQuery + ?Sized>(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
        ocean: &Q,
    ) -> CameraFrame {
        let (view_proj, eye) = self.create_view_proj_matrix(time_s, render_config);
        CameraFrame {
            view_proj,
            eye,
            underwater: ocean.is_submerged(eye, time_s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::SurfacePoint;

    struct FlatSea;

    impl SurfaceQuery for FlatSea {
        fn surface_at(&self, xz: Vec3, _time: f32) -> SurfacePoint {
            SurfacePoint {
                position: Vec3::new(xz.x, 0.0, xz.z),
                normal: Vec3::Y,
            }
        }
    }

    #[test]
    fn test_drift_camera_straight_line() {
        let params = DriftCamera::default();
        let camera = CameraSystem::new(CameraPreset::Drift(params.clone()));

        let (eye0, target0) = camera.compute_position_and_target(0.0);
        assert_eq!(eye0, Vec3::new(0.0, params.altitude_m, 0.0));

        let (eye1, target1) = camera.compute_position_and_target(1.0);
        assert_eq!(eye1.y, params.altitude_m);
        assert_eq!(eye1.z, params.forward_speed_m_per_s);

        // Target always ahead by look_ahead_m
        assert_eq!(target0.z, eye0.z + params.look_ahead_m);
        assert_eq!(target1.z, eye1.z + params.look_ahead_m);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraPreset::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye_pos) = camera.create_view_proj_matrix(0.0, &render_config);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(eye_pos.is_finite());
    }

    #[test]
    fn test_underwater_flag() {
        let render_config = RenderConfig::default();
        let above = CameraSystem::new(CameraPreset::Drift(DriftCamera {
            altitude_m: 3.0,
            ..Default::default()
        }));
        let below = CameraSystem::new(CameraPreset::Drift(DriftCamera {
            altitude_m: -3.0,
            ..Default::default()
        }));

        assert!(!above.frame(1.0, &render_config, &FlatSea).underwater);
        assert!(below.frame(1.0, &render_config, &FlatSea).underwater);
    }
}
