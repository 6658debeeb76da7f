//! Frame time shared by the GPU upload and CPU queries.

/// Monotonic simulation time in seconds
///
/// One value is read per frame and handed to both `wave_uniforms` and every
/// surface query, so rendered and queried geometry agree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed_s: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame time
    pub fn now(&self) -> f32 {
        self.elapsed_s
    }

    /// Step forward by `dt_s`; negative or non-finite steps are ignored
    pub fn advance(&mut self, dt_s: f32) -> f32 {
        if dt_s.is_finite() && dt_s > 0.0 {
            self.elapsed_s += dt_s;
        } else if dt_s != 0.0 {
            log::warn!("Ignoring non-monotonic clock step {}", dt_s);
        }
        self.elapsed_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.advance(0.5), 0.5);
        assert_eq!(clock.advance(-1.0), 0.5);
        assert_eq!(clock.advance(f32::NAN), 0.5);
        assert_eq!(clock.advance(0.25), 0.75);
    }
}
