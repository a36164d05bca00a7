//! Experiment configuration via TOML files.
//!
//! This module provides configuration parsing from TOML format with
//! per-field defaults and validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::planar::PlanarConfig;

/// Experiment configuration loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use planar_lab_core::ExperimentConfig;
///
/// let config = ExperimentConfig::load_from_file("config/experiment.toml")
///     .unwrap_or_else(|_| ExperimentConfig::default());
///
/// println!(
///     "complexity={} num_points={}",
///     config.planar.complexity, config.planar.num_points
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentConfig {
    /// Planar dataset generation parameters
    pub planar: PlanarSection,
    /// Surface rendering parameters
    pub surface: SurfaceSection,
}

impl ExperimentConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawExperimentConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        let planar = PlanarSection::try_from(&raw.planar)?;
        let surface = SurfaceSection::try_from(&raw.surface)?;

        Ok(Self { planar, surface })
    }

    /// View the planar section as a generator configuration.
    pub fn to_planar_config(&self) -> PlanarConfig {
        PlanarConfig {
            complexity: self.planar.complexity,
            noisiness: self.planar.noisiness,
            num_points: self.planar.num_points,
            xylim: self.planar.xylim,
            seed: self.planar.seed,
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            planar: PlanarSection {
                complexity: default_complexity(),
                noisiness: default_noisiness(),
                num_points: default_num_points(),
                xylim: (-5.0, 5.0),
                seed: default_seed(),
            },
            surface: SurfaceSection {
                resolution: default_resolution(),
                width: default_width(),
                height: default_height(),
            },
        }
    }
}

/// Planar dataset generation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct PlanarSection {
    pub complexity: usize,
    pub noisiness: f64,
    pub num_points: usize,
    pub xylim: (f64, f64),
    pub seed: u64,
}

impl PlanarSection {
    fn try_from(raw: &RawPlanarSection) -> Result<Self, ConfigError> {
        if raw.complexity == 0 {
            return Err(ConfigError::Parse("planar.complexity must be >= 1".into()));
        }
        if !raw.noisiness.is_finite() || !(0.0..=1.0).contains(&raw.noisiness) {
            return Err(ConfigError::Parse(
                "planar.noisiness must lie in [0, 1]".into(),
            ));
        }
        if raw.num_points == 0 {
            return Err(ConfigError::Parse("planar.num_points must be >= 1".into()));
        }
        let [low, high] = raw.xylim;
        if !low.is_finite() || !high.is_finite() || low >= high || high == 0.0 {
            return Err(ConfigError::Parse(
                "planar.xylim must be ordered, finite, with a nonzero upper bound".into(),
            ));
        }

        Ok(Self {
            complexity: raw.complexity,
            noisiness: raw.noisiness,
            num_points: raw.num_points,
            xylim: (low, high),
            seed: raw.seed,
        })
    }
}

/// Surface rendering parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceSection {
    pub resolution: f64,
    pub width: u32,
    pub height: u32,
}

impl SurfaceSection {
    fn try_from(raw: &RawSurfaceSection) -> Result<Self, ConfigError> {
        if !raw.resolution.is_finite() || raw.resolution <= 0.0 {
            return Err(ConfigError::Parse(
                "surface.resolution must be positive".into(),
            ));
        }
        if raw.width == 0 || raw.height == 0 {
            return Err(ConfigError::Parse(
                "surface.width and surface.height must be >= 1".into(),
            ));
        }

        Ok(Self {
            resolution: raw.resolution,
            width: raw.width,
            height: raw.height,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawExperimentConfig {
    #[serde(default)]
    planar: RawPlanarSection,
    #[serde(default)]
    surface: RawSurfaceSection,
}

#[derive(Debug, Deserialize)]
struct RawPlanarSection {
    #[serde(default = "default_complexity")]
    complexity: usize,
    #[serde(default = "default_noisiness")]
    noisiness: f64,
    #[serde(default = "default_num_points")]
    num_points: usize,
    #[serde(default = "default_xylim")]
    xylim: [f64; 2],
    #[serde(default = "default_seed")]
    seed: u64,
}

impl Default for RawPlanarSection {
    fn default() -> Self {
        Self {
            complexity: default_complexity(),
            noisiness: default_noisiness(),
            num_points: default_num_points(),
            xylim: default_xylim(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSurfaceSection {
    #[serde(default = "default_resolution")]
    resolution: f64,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
}

impl Default for RawSurfaceSection {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_complexity() -> usize {
    10
}

fn default_noisiness() -> f64 {
    0.33
}

fn default_num_points() -> usize {
    256
}

fn default_xylim() -> [f64; 2] {
    [-5.0, 5.0]
}

fn default_seed() -> u64 {
    42
}

fn default_resolution() -> f64 {
    0.05
}

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    800
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}
