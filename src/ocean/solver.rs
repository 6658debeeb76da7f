//! Inverse surface query.
//!
//! `evaluate` maps an input XZ location to a displaced point whose own XZ
//! differs from the input, because Gerstner waves also move water sideways.
//! The solver walks the input until the displaced XZ lands on the requested
//! location. The map is close to identity for authored steepness, so a short
//! fixed-point loop converges in practice. There is no tolerance check and no
//! divergence guard: extreme edits can make the result wander.

use glam::Vec3;

use super::field::evaluate;
use super::waves::WaveParameter;
use super::SurfacePoint;

/// Fixed-point iterations per query unless configured otherwise
pub const DEFAULT_SOLVER_ITERATIONS: usize = 10;

/// Fixed-iteration inverse of the forward wave map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSolver {
    iterations: usize,
}

impl Default for SurfaceSolver {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER_ITERATIONS)
    }
}

impl SurfaceSolver {
    /// Solver running exactly `iterations` steps (at least one)
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Surface point whose horizontal projection approximates `desired.xz`
    ///
    /// `desired.y` is ignored.
    pub fn solve(&self, desired: Vec3, time: f32, waves: &[WaveParameter]) -> SurfacePoint {
        let mut candidate = desired;
        let mut sample = evaluate(candidate, time, waves);

        for _ in 1..self.iterations {
            // Only the horizontal part of the error moves the result; evaluate drops y
            let error = sample.position - desired;
            candidate -= error;
            sample = evaluate(candidate, time, waves);
        }

        SurfacePoint {
            position: sample.position,
            normal: sample.normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::WaveParameterSet;
    use crate::params::WaveGeneration;
    use glam::Vec2;

    fn horizontal_error(point: &SurfacePoint, desired: Vec3) -> f32 {
        Vec2::new(point.position.x - desired.x, point.position.z - desired.z).length()
    }

    #[test]
    fn test_flat_water_is_exact() {
        let waves = vec![
            WaveParameter::new(Vec2::new(0.2, 0.9), 0.0, 8.0),
            WaveParameter::new(Vec2::new(-0.7, 0.4), 0.0, 90.0),
        ];
        let solver = SurfaceSolver::default();
        for q in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(12.5, 40.0, -7.25),
            Vec3::new(-300.0, -2.0, 1000.0),
        ] {
            let point = solver.solve(q, 3.0, &waves);
            assert_eq!(point.position.x, q.x);
            assert_eq!(point.position.z, q.z);
            assert_eq!(point.position.y, 0.0);
            assert_eq!(point.normal, Vec3::Y);
        }
    }

    fn query_points() -> impl Iterator<Item = (Vec3, f32)> {
        (0..50).map(|j| {
            let j = j as f32;
            (Vec3::new(j * 17.0 - 400.0, 5.0, 300.0 - j * 13.0), j * 0.7)
        })
    }

    #[test]
    fn test_converges_on_default_sea() {
        let set = WaveParameterSet::generate(&WaveGeneration::default()).unwrap();
        let bound = set.height_bound();
        let solver = SurfaceSolver::default();

        let mut total = 0.0;
        for (q, t) in query_points() {
            let point = solver.solve(q, t, set.as_slice());
            let err = horizontal_error(&point, q);
            assert!(err < bound, "error {} exceeds amplitude sum {}", err, bound);
            assert!((point.normal.length() - 1.0).abs() < 1e-4);
            total += err;
        }
        let mean = total / 50.0;
        assert!(mean < 0.05, "mean error {} after {} iterations", mean, solver.iterations());
    }

    #[test]
    fn test_more_iterations_tighten_the_fit() {
        let waves = vec![WaveParameter::new(Vec2::new(1.0, 0.3), 0.4, 20.0)];
        let q = Vec3::new(3.0, 0.0, 1.0);

        let coarse = SurfaceSolver::new(1).solve(q, 0.8, &waves);
        let fine = SurfaceSolver::new(10).solve(q, 0.8, &waves);
        assert!(horizontal_error(&fine, q) < horizontal_error(&coarse, q));
    }

    #[test]
    fn test_recovers_forward_height() {
        let set = WaveParameterSet::generate(&WaveGeneration::default()).unwrap();
        let solver = SurfaceSolver::default();

        let mut total = 0.0;
        for (input, t) in query_points() {
            let forward = evaluate(input, t, set.as_slice());
            let point = solver.solve(forward.position, t, set.as_slice());
            total += (point.position.y - forward.position.y).abs();
        }
        assert!(total / 50.0 < 0.05);
    }

    #[test]
    fn test_zero_iterations_clamped_to_one() {
        assert_eq!(SurfaceSolver::new(0).iterations(), 1);
    }
}
