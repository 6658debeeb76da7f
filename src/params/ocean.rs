//! Wave synthesis parameters.

use crate::error::OceanError;

/// Seed used for wave direction synthesis unless a configuration overrides it
pub const DEFAULT_WAVE_SEED: u64 = 100;

/// Capacity of the wave uniform block shared with the renderer
pub const MAX_WAVES: usize = 64;

/// Wave parameter synthesis settings
#[derive(Debug, Clone, PartialEq)]
pub struct WaveGeneration {
    /// Number of superposed waves (0..=MAX_WAVES)
    pub count: usize,

    /// PRNG seed for wave directions
    pub seed: u64,

    /// Wavelength of the first (shortest) wave in meters
    pub min_wavelength_m: f32,

    /// Wavelength the last wave approaches in meters
    pub max_wavelength_m: f32,

    /// Steepness assigned to regular waves (dimensionless, amplitude * k)
    pub steepness: f32,

    /// Steepness for waves shorter than `short_wave_threshold_m`
    /// Keeps small chop from folding over into self-intersecting peaks
    pub short_wave_steepness: f32,

    /// Wavelength below which `short_wave_steepness` applies (meters)
    pub short_wave_threshold_m: f32,
}

impl Default for WaveGeneration {
    fn default() -> Self {
        Self {
            count: 20,
            seed: DEFAULT_WAVE_SEED,
            min_wavelength_m: 5.0,
            max_wavelength_m: 500.0,
            steepness: 0.1,
            short_wave_steepness: 0.025,
            short_wave_threshold_m: 10.0,
        }
    }
}

impl WaveGeneration {
    /// Check count against the uniform capacity and the wavelength range
    pub fn validate(&self) -> Result<(), OceanError> {
        if self.count > MAX_WAVES {
            return Err(OceanError::TooManyWaves {
                count: self.count,
                max: MAX_WAVES,
            });
        }
        let min = self.min_wavelength_m;
        let max = self.max_wavelength_m;
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || max < min {
            return Err(OceanError::InvalidWavelengthRange { min, max });
        }
        Ok(())
    }
}
