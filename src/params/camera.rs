//! Camera presets and floating object tuning.

/// Stationary camera (debugging, submersion checks)
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub position: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 40.0, 3.0], // Above the theoretical crest height of the default waves
            target: [0.0, 0.0, 100.0],
        }
    }
}

/// Straight-line drift across the surface at a constant altitude
#[derive(Debug, Clone)]
pub struct DriftCamera {
    /// Constant altitude (meters, may be negative to travel underwater)
    pub altitude_m: f32,

    /// Forward movement speed along +Z (meters per second)
    pub forward_speed_m_per_s: f32,

    /// Look-ahead distance (meters)
    pub look_ahead_m: f32,
}

impl Default for DriftCamera {
    fn default() -> Self {
        Self {
            altitude_m: 2.0, // Low enough that large swells pass over the lens
            forward_speed_m_per_s: 5.0,
            look_ahead_m: 50.0,
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary camera
    Fixed(FixedCamera),

    /// Drift preset: straight-line flight at constant altitude, looking forward
    Drift(DriftCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}

/// Floating object response to the surface
#[derive(Debug, Clone)]
pub struct FloatingParams {
    /// Fraction of the remaining tilt closed per second (1/s)
    pub rotation_lag_speed: f32,

    /// Vertical offset of the object origin relative to the surface (meters)
    pub draft_m: f32,
}

impl Default for FloatingParams {
    fn default() -> Self {
        Self {
            rotation_lag_speed: 2.0,
            draft_m: 0.0,
        }
    }
}
