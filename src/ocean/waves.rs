//! Wave parameter synthesis and runtime editing.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::OceanError;
use crate::params::{WaveGeneration, MAX_WAVES};

/// One trochoidal wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameter {
    /// Travel heading in the XZ plane (normalized at evaluation time)
    pub direction: Vec2,
    /// Amplitude times wavenumber
    pub steepness: f32,
    /// Crest-to-crest distance in meters
    pub wavelength: f32,
}

impl WaveParameter {
    pub fn new(direction: Vec2, steepness: f32, wavelength: f32) -> Self {
        Self {
            direction,
            steepness,
            wavelength,
        }
    }

    /// Wavenumber k = 2π / λ
    #[inline]
    pub fn wave_number(&self) -> f32 {
        TAU / self.wavelength
    }

    /// Vertical amplitude a = steepness / k
    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.steepness / self.wave_number()
    }

    /// Uniform row layout: direction.x, direction.y, steepness, wavelength
    pub fn to_uniform_row(&self) -> [f32; 4] {
        [
            self.direction.x,
            self.direction.y,
            self.steepness,
            self.wavelength,
        ]
    }
}

/// Editable field of a single wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveProperty {
    DirectionX,
    DirectionZ,
    Steepness,
    Wavelength,
}

impl fmt::Display for WaveProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DirectionX => "direction-x",
            Self::DirectionZ => "direction-z",
            Self::Steepness => "steepness",
            Self::Wavelength => "wavelength",
        };
        f.write_str(name)
    }
}

impl FromStr for WaveProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direction-x" | "dx" => Ok(Self::DirectionX),
            "direction-z" | "dz" => Ok(Self::DirectionZ),
            "steepness" => Ok(Self::Steepness),
            "wavelength" => Ok(Self::Wavelength),
            other => Err(format!("unknown wave property '{}'", other)),
        }
    }
}

/// Wave block uploaded to the vertex/tessellation stages
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    pub waves: [[f32; 4]; MAX_WAVES],
    pub time: f32,
    pub wave_count: u32,
    pub _padding: [u32; 2], // Padding for alignment
}

/// Ordered collection of waves shared by the renderer and the surface solver
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveParameterSet {
    waves: Vec<WaveParameter>,
}

impl WaveParameterSet {
    /// Synthesize waves from a seeded PRNG
    ///
    /// Wavelength follows a cubic ease from `min` to `max`, so the low indices
    /// carry short chop and the high indices carry long swell. Directions are
    /// biased toward +Z to give the sea a dominant heading.
    pub fn generate(config: &WaveGeneration) -> Result<Self, OceanError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut waves = Vec::with_capacity(config.count);

        for i in 0..config.count {
            let p = i as f32 / config.count as f32;
            let wavelength = (config.max_wavelength_m - config.min_wavelength_m) * p.powi(3)
                + config.min_wavelength_m;

            let x_direction = rng.gen::<f32>() * 2.0 - 1.0;
            let z_direction = 0.5 + (rng.gen::<f32>() * 2.0 - 1.0) * 0.5;

            let steepness = if wavelength < config.short_wave_threshold_m {
                config.short_wave_steepness
            } else {
                config.steepness
            };

            waves.push(WaveParameter::new(
                Vec2::new(x_direction, z_direction),
                steepness,
                wavelength,
            ));
        }

        let set = Self { waves };
        let max_height = set.height_bound();
        log::info!(
            "Generated {} waves (seed {}), height range: [{:.3}, {:.3}]",
            set.len(),
            config.seed,
            -max_height,
            max_height
        );
        Ok(set)
    }

    /// Wrap explicit waves (authored presets, tests)
    pub fn from_waves(waves: Vec<WaveParameter>) -> Result<Self, OceanError> {
        if waves.len() > MAX_WAVES {
            return Err(OceanError::TooManyWaves {
                count: waves.len(),
                max: MAX_WAVES,
            });
        }
        Ok(Self { waves })
    }

    /// Overwrite one field of one wave
    ///
    /// Only the index is checked. Non-physical values are accepted so the
    /// editor can push the surface into extreme shapes.
    pub fn edit(
        &mut self,
        index: usize,
        property: WaveProperty,
        value: f32,
    ) -> Result<(), OceanError> {
        let count = self.waves.len();
        let wave = self
            .waves
            .get_mut(index)
            .ok_or(OceanError::WaveIndexOutOfRange { index, count })?;

        match property {
            WaveProperty::DirectionX => wave.direction.x = value,
            WaveProperty::DirectionZ => wave.direction.y = value,
            WaveProperty::Steepness => wave.steepness = value,
            WaveProperty::Wavelength => wave.wavelength = value,
        }
        Ok(())
    }

    /// Theoretical maximum crest height: Σ steepness / k
    pub fn height_bound(&self) -> f32 {
        self.waves.iter().map(WaveParameter::amplitude).sum()
    }

    pub fn as_slice(&self) -> &[WaveParameter] {
        &self.waves
    }

    pub fn get(&self, index: usize) -> Option<&WaveParameter> {
        self.waves.get(index)
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Flatten into the uniform block for the given frame time
    pub fn to_uniforms(&self, time: f32) -> WaveUniforms {
        let mut waves = [[0.0; 4]; MAX_WAVES];
        for (row, wave) in waves.iter_mut().zip(&self.waves) {
            *row = wave.to_uniform_row();
        }
        WaveUniforms {
            waves,
            time,
            wave_count: self.waves.len() as u32,
            _padding: [0; 2],
        }
    }
}
