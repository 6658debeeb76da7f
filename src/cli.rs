//! Command-line argument parsing.

use std::str::FromStr;

use clap::Parser;
use glam::Vec3;

use crate::ocean::WaveProperty;
use crate::params::{
    CameraPreset, DriftCamera, FixedCamera, MeshConfig, MeshTechnique, WaveGeneration,
    DEFAULT_WAVE_SEED,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "oceanwave")]
#[command(about = "Frame-stepped Gerstner ocean simulation", long_about = None)]
pub struct Args {
    /// Number of frames to simulate
    #[arg(long, value_name = "FRAMES", default_value_t = 120)]
    pub frames: u32,

    /// Frame step (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Surface mesh side length (meters)
    #[arg(long, value_name = "METERS", default_value_t = 1000.0)]
    pub extent: f32,

    /// Surface mesh quad edge length (meters)
    #[arg(long, value_name = "METERS", default_value_t = 10.0)]
    pub resolution: f32,

    /// Mesh technique
    #[arg(long, value_enum, default_value_t = MeshTechnique::Patches)]
    pub technique: MeshTechnique,

    /// Number of superposed waves
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub waves: usize,

    /// Wave direction seed
    #[arg(long, value_name = "SEED", default_value_t = DEFAULT_WAVE_SEED)]
    pub seed: u64,

    /// Camera preset: fixed (default) or drift
    #[arg(long, value_name = "PRESET", default_value = "fixed")]
    pub camera_preset: String,

    /// Camera altitude for the drift preset (meters)
    #[arg(long, value_name = "METERS", default_value_t = 2.0)]
    pub altitude: f32,

    /// Floating object anchor "x,z" (repeatable)
    #[arg(long = "float", value_name = "X,Z", value_parser = parse_anchor)]
    pub floats: Vec<Vec3>,

    /// Wave edit "index:property=value" applied before the first frame (repeatable)
    #[arg(long = "edit", value_name = "EDIT")]
    pub edits: Vec<WaveEdit>,

    /// Upload mesh and wave uniforms to a headless GPU device each frame
    #[arg(long)]
    pub gpu: bool,
}

impl Args {
    pub fn mesh_config(&self) -> MeshConfig {
        MeshConfig::new(self.extent, self.resolution, self.technique)
    }

    pub fn wave_generation(&self) -> WaveGeneration {
        WaveGeneration {
            count: self.waves,
            seed: self.seed,
            ..Default::default()
        }
    }

    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "fixed" => CameraPreset::Fixed(FixedCamera::default()),
            "drift" => {
                log::info!("Camera: Drift (altitude: {}m)", self.altitude);
                CameraPreset::Drift(DriftCamera {
                    altitude_m: self.altitude,
                    ..Default::default()
                })
            }
            other => {
                log::warn!("Unknown camera preset '{}', using fixed", other);
                CameraPreset::Fixed(FixedCamera::default())
            }
        }
    }
}

/// Single wave edit parsed from `index:property=value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveEdit {
    pub index: usize,
    pub property: WaveProperty,
    pub value: f32,
}

impl FromStr for WaveEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected index:property=value, got '{}'", s))?;
        let (property, value) = rest
            .split_once('=')
            .ok_or_else(|| format!("expected property=value, got '{}'", rest))?;

        Ok(Self {
            index: index
                .trim()
                .parse()
                .map_err(|e| format!("bad wave index '{}': {}", index, e))?,
            property: property.trim().parse()?,
            value: value
                .trim()
                .parse()
                .map_err(|e| format!("bad value '{}': {}", value, e))?,
        })
    }
}

fn parse_anchor(s: &str) -> Result<Vec3, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,z, got '{}'", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let z: f32 = z.trim().parse().map_err(|e| format!("bad z '{}': {}", z, e))?;
    Ok(Vec3::new(x, 0.0, z))
}
