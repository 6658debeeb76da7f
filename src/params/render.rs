//! Projection configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Viewport width (pixels)
    pub window_width: u32,

    /// Viewport height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    /// Must cover the mesh extent for the surface edge to stay visible
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1400,
            window_height: 800,
            fov_degrees: 45.0,
            near_plane_m: 0.1,
            far_plane_m: 2000.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}
