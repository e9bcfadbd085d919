/// Startup configuration loaded from TOML
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geometry::Cube;
use crate::projection::DEFAULT_FOV;

/// Accepted tick and frame rates, in Hz
pub const RATE_RANGE: RangeInclusive<f64> = 1.0..=1000.0;

/// Initial geometry of one cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl CubeConfig {
    pub fn build(&self) -> Cube {
        Cube::new(Vector3::new(self.x, self.y, self.z), self.width, self.height, self.depth)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Logical drawing area in pixels
    pub width: u32,
    pub height: u32,
    pub fov: f64,
    /// Simulation ticks per second
    pub tick_rate: f64,
    /// Frame-rate cap for drawing
    pub frame_rate: f64,
    pub log_file: PathBuf,
    pub cubes: Vec<CubeConfig>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            title: String::from("Rotating Cube"),
            width: 800,
            height: 600,
            fov: DEFAULT_FOV,
            tick_rate: 50.0,
            frame_rate: 60.0,
            log_file: PathBuf::from("wirecube.log"),
            cubes: vec![
                CubeConfig {
                    x: 300.0,
                    y: 200.0,
                    z: 0.0,
                    width: 100.0,
                    height: 100.0,
                    depth: 50.0,
                },
                CubeConfig {
                    x: 500.0,
                    y: 200.0,
                    z: 0.0,
                    width: 100.0,
                    height: 100.0,
                    depth: 50.0,
                },
            ],
        }
    }

    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(source).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.fov.is_finite() {
            bail!("fov must be a finite number, got {}", self.fov);
        }
        if !RATE_RANGE.contains(&self.tick_rate) {
            bail!(
                "tick_rate must be within {}..={} Hz, got {}",
                RATE_RANGE.start(),
                RATE_RANGE.end(),
                self.tick_rate
            );
        }
        if !RATE_RANGE.contains(&self.frame_rate) {
            bail!(
                "frame_rate must be within {}..={} Hz, got {}",
                RATE_RANGE.start(),
                RATE_RANGE.end(),
                self.frame_rate
            );
        }
        if self.width == 0 || self.height == 0 {
            bail!("width and height must be non-zero, got {}x{}", self.width, self.height);
        }
        if self.cubes.is_empty() {
            bail!("at least one cube is required");
        }
        for (index, cube) in self.cubes.iter().enumerate() {
            let values = [cube.x, cube.y, cube.z, cube.width, cube.height, cube.depth];
            if values.iter().any(|value| !value.is_finite()) {
                bail!("cube {} has a non-finite coordinate or extent", index);
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
