//! Objects riding the wave surface.

use glam::{Mat4, Vec2, Vec3};

use crate::ocean::SurfaceQuery;
use crate::params::FloatingParams;

/// Object anchored at a horizontal location, bobbing and tilting with the sea
///
/// The object does not own the ocean; it borrows a `SurfaceQuery` for each
/// update.
#[derive(Debug, Clone)]
pub struct FloatingObject {
    /// Horizontal anchor (y ignored)
    pub anchor: Vec3,
    /// Current (pitch about X, roll about Z) in radians
    tilt: Vec2,
    params: FloatingParams,
}

impl FloatingObject {
    pub fn new(anchor: Vec3, params: FloatingParams) -> Self {
        Self {
            anchor,
            tilt: Vec2::ZERO,
            params,
        }
    }

    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    /// Advance one frame and return the model transform
    ///
    /// Height follows the surface exactly. Orientation closes a fraction
    /// `rotation_lag_speed * dt` of the gap to the surface normal each frame,
    /// capped at the full gap.
    pub fn update<Q: SurfaceQuery + ?Sized>(&mut self, ocean: &Q, time: f32, dt: f32) -> Mat4 {
        let surface = ocean.surface_at(self.anchor, time);
        let target = tilt_toward(surface.normal);
        let blend = (self.params.rotation_lag_speed * dt).clamp(0.0, 1.0);
        self.tilt = self.tilt.lerp(target, blend);

        let origin = Vec3::new(
            self.anchor.x,
            surface.position.y + self.params.draft_m,
            self.anchor.z,
        );
        Mat4::from_translation(origin)
            * Mat4::from_rotation_x(self.tilt.x)
            * Mat4::from_rotation_z(self.tilt.y)
    }
}

/// Pitch and roll such that `rotation_x(pitch) * rotation_z(roll)` maps +Y
/// onto the unit `normal`
pub fn tilt_toward(normal: Vec3) -> Vec2 {
    let pitch = normal.z.atan2(normal.y);
    let roll = -normal.x.atan2(Vec2::new(normal.y, normal.z).length());
    Vec2::new(pitch, roll)
}
