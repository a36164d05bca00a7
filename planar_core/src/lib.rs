//! # Planar Lab Core
//!
//! Small experimentation utilities for classroom machine-learning work:
//! synthetic 2D classification datasets built from superposed plane waves,
//! decision-surface rendering for arbitrary predictors, and a loader for a
//! compressed tabular regression dataset.
//!
//! ## Quick Start
//!
//! ```rust
//! use planar_lab_core::{PlanarConfig, PlanarDataset};
//!
//! let dataset = PlanarDataset::generate(PlanarConfig {
//!     num_points: 64,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert_eq!(dataset.len(), 64);
//!
//! // The generating field stays callable as the ground-truth surface.
//! let amplitude = dataset.field().evaluate(&dataset.points).unwrap();
//! assert!(amplitude.iter().all(|&value| value > 0.0 && value < 1.0));
//! ```
//!
//! ## Core Modules
//!
//! - [`field`] - Plane-wave amplitude fields
//! - [`data`] - Dataset generation and loading
//! - [`plot`] - Decision-surface and scatter rendering
//! - [`config`] - Experiment configuration via TOML
//! - [`logging`] - JSON line-delimited run logs

pub mod config;
pub mod data;
pub mod error;
pub mod field;
pub mod logging;
pub mod plot;

pub use config::{ConfigError, ExperimentConfig};
pub use data::conductors::{ConductorsTable, TableError};
pub use data::line::LineSamples;
pub use data::planar::{PlanarConfig, PlanarDataset};
pub use error::{PlanarError, PlanarResult};
pub use field::{WaveComponent, WaveField};
pub use plot::grid::SurfaceGrid;
pub use plot::scatter::plot_two_class_scatter;
pub use plot::surface::{
    render_decision_surface, render_surface_png, SurfaceOptions, SurfaceTarget,
};
pub use plot::{diverging_rgb, FnPredictor, Predictor};
