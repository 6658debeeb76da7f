//! Forward Gerstner evaluation.
//!
//! `evaluate` is the single definition of the surface. A renderer displacing
//! `SurfaceMesh` vertices on the GPU reads the `WaveUniforms` block, one
//! `[dir_x, dir_z, steepness, wavelength]` row per wave plus the shared time,
//! and must apply this summation with the same `GRAVITY` and `WAVE_SPEED` for
//! rendered geometry to match `surface_at`.

use glam::{Vec2, Vec3};

use super::waves::WaveParameter;

/// Gravitational acceleration used in the deep-water dispersion relation (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Global animation speed multiplier applied to every wave's phase speed
pub const WAVE_SPEED: f32 = 3.0;

/// Displaced surface point with its local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Base XZ plus accumulated displacement; y is the summed wave height
    pub position: Vec3,
    /// Partial derivative of the surface along +X
    pub tangent: Vec3,
    /// Partial derivative of the surface along +Z
    pub binormal: Vec3,
}

impl WaveSample {
    /// Unit surface normal, `binormal × tangent`
    pub fn normal(&self) -> Vec3 {
        self.binormal.cross(self.tangent).normalize()
    }
}

/// Phase speed c = sqrt(g / k)
#[inline]
pub fn phase_speed(wave: &WaveParameter) -> f32 {
    (GRAVITY / wave.wave_number()).sqrt()
}

/// Time for one full cycle of a wave at a fixed point
pub fn period(wave: &WaveParameter) -> f32 {
    wave.wavelength / (phase_speed(wave) * WAVE_SPEED)
}

/// Phase of a wave at horizontal position `xz`
#[inline]
pub fn phase(wave: &WaveParameter, xz: Vec2, time: f32) -> f32 {
    let d = wave.direction.normalize_or_zero();
    wave.wave_number() * (d.dot(xz) - phase_speed(wave) * time * WAVE_SPEED)
}

/// Sum all waves at `base` (its y is ignored)
pub fn evaluate(base: Vec3, time: f32, waves: &[WaveParameter]) -> WaveSample {
    let xz = Vec2::new(base.x, base.z);
    let mut position = Vec3::new(base.x, 0.0, base.z);
    let mut tangent = Vec3::X;
    let mut binormal = Vec3::Z;

    for wave in waves {
        let d = wave.direction.normalize_or_zero();
        let s = wave.steepness;
        let a = wave.amplitude();
        let f = phase(wave, xz, time);
        let (sin_f, cos_f) = f.sin_cos();

        position += Vec3::new(d.x * a * cos_f, a * sin_f, d.y * a * cos_f);

        tangent += Vec3::new(
            -d.x * d.x * (s * sin_f),
            d.x * (s * cos_f),
            -d.x * d.y * (s * sin_f),
        );
        binormal += Vec3::new(
            -d.x * d.y * (s * sin_f),
            d.y * (s * cos_f),
            -d.y * d.y * (s * sin_f),
        );
    }

    WaveSample {
        position,
        tangent,
        binormal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(direction: Vec2, steepness: f32, wavelength: f32) -> Vec<WaveParameter> {
        vec![WaveParameter::new(direction, steepness, wavelength)]
    }

    #[test]
    fn test_no_waves_is_identity() {
        for t in [0.0, 0.37, 12.0, 1000.0] {
            let sample = evaluate(Vec3::new(4.5, 7.0, -3.25), t, &[]);
            assert_eq!(sample.position, Vec3::new(4.5, 0.0, -3.25));
            assert_eq!(sample.normal(), Vec3::Y);
        }
    }

    #[test]
    fn test_zero_steepness_is_identity() {
        let waves = vec![
            WaveParameter::new(Vec2::new(0.3, 0.8), 0.0, 12.0),
            WaveParameter::new(Vec2::new(-1.0, 0.2), 0.0, 140.0),
        ];
        for t in [0.0, 2.5, 60.0] {
            let sample = evaluate(Vec3::new(-20.0, 3.0, 11.0), t, &waves);
            assert_eq!(sample.position, Vec3::new(-20.0, 0.0, 11.0));
            assert_eq!(sample.normal(), Vec3::Y);
        }
    }

    #[test]
    fn test_single_wave_periodicity() {
        let waves = single(Vec2::new(0.6, 0.8), 0.1, 10.0);
        let wave = &waves[0];
        let base = Vec3::new(3.0, 0.0, -2.0);
        let t = 1.3;

        let a = evaluate(base, t, &waves);
        let b = evaluate(base, t + period(wave), &waves);

        let phase_a = phase(wave, Vec2::new(base.x, base.z), t);
        let phase_b = phase(wave, Vec2::new(base.x, base.z), t + period(wave));
        assert!((phase_a - phase_b - std::f32::consts::TAU).abs() < 1e-3);
        assert!(a.position.abs_diff_eq(b.position, 1e-3));
        assert!(a.normal().abs_diff_eq(b.normal(), 1e-3));
    }

    #[test]
    fn test_direction_is_normalized() {
        let unit = single(Vec2::new(0.6, 0.8), 0.1, 20.0);
        let scaled = single(Vec2::new(3.0, 4.0), 0.1, 20.0);
        let base = Vec3::new(1.0, 0.0, 2.0);

        let a = evaluate(base, 0.5, &unit);
        let b = evaluate(base, 0.5, &scaled);
        assert!(a.position.abs_diff_eq(b.position, 1e-5));
    }

    #[test]
    fn test_height_bounded_by_amplitude() {
        let waves = single(Vec2::X, 0.1, 50.0);
        let amplitude = waves[0].amplitude();
        for i in 0..100 {
            let x = i as f32 * 0.73;
            let sample = evaluate(Vec3::new(x, 0.0, 0.0), 0.0, &waves);
            assert!(sample.position.y.abs() <= amplitude + 1e-5);
        }
    }

    #[test]
    fn test_crest_moves_along_direction() {
        // Along +X the phase argument is k(x - c*t*speed): the profile translates by c*speed*dt
        let waves = single(Vec2::X, 0.1, 40.0);
        let c = phase_speed(&waves[0]) * WAVE_SPEED;
        let dt = 0.25;

        let before = evaluate(Vec3::new(5.0, 0.0, 0.0), 0.0, &waves);
        let after = evaluate(Vec3::new(5.0 + c * dt, 0.0, 0.0), dt, &waves);
        assert!((before.position.y - after.position.y).abs() < 1e-4);
    }

    #[test]
    fn test_normal_is_unit_and_tilts_against_slope() {
        let waves = single(Vec2::X, 0.3, 30.0);
        let sample = evaluate(Vec3::ZERO, 0.0, &waves);
        let normal = sample.normal();

        assert!((normal.length() - 1.0).abs() < 1e-5);
        // dy/dx = a*k*cos(0) > 0 at f = 0, so the surface rises toward +X and the normal leans -X
        assert!(normal.x < 0.0);
        assert!(normal.y > 0.0);
    }

    #[test]
    fn test_base_height_is_discarded() {
        let waves = single(Vec2::new(1.0, 1.0), 0.1, 25.0);
        let low = evaluate(Vec3::new(2.0, -50.0, 2.0), 4.0, &waves);
        let high = evaluate(Vec3::new(2.0, 50.0, 2.0), 4.0, &waves);
        assert_eq!(low, high);
    }
}
