//! Synthetic planar classification dataset
//!
//! Generates labeled 2D point clouds whose decision boundary follows a
//! randomized plane-wave field. The field is kept on the dataset so callers
//! can later evaluate the same ground-truth surface on new batches.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::PlanarError;
use crate::field::WaveField;

/// Configuration for planar dataset generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanarConfig {
    /// Number of wave components; controls boundary intricacy
    pub complexity: usize,
    /// Label jitter magnitude in [0, 1]: 0 is a hard threshold, 1 is fully
    /// random labels
    pub noisiness: f64,
    /// Number of samples to draw
    pub num_points: usize,
    /// Extent `(low, high)` of the sampling square on both axes
    pub xylim: (f64, f64),
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for PlanarConfig {
    fn default() -> Self {
        Self {
            complexity: 10,
            noisiness: 0.33,
            num_points: 256,
            xylim: (-5.0, 5.0),
            seed: 42,
        }
    }
}

/// A labeled planar dataset plus the wave field that generated it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanarDataset {
    /// Sample coordinates, one (x, y) row per sample
    pub points: Array2<f64>,
    /// Binary class labels, aligned with `points` rows
    pub labels: Array1<u8>,
    field: WaveField,
    /// The configuration this dataset was generated from
    pub config: PlanarConfig,
}

impl PlanarDataset {
    /// Generate a new dataset from an owned, seeded random stream.
    ///
    /// The stream is consumed in a fixed order (field components, then
    /// points, then per-sample jitter), so identical configurations produce
    /// bit-identical datasets.
    ///
    /// Each sample is labeled 1 when the batch-normalized field amplitude
    /// at its location exceeds `0.5 * (1 - noisiness)` plus a per-sample
    /// jitter drawn uniformly from `[0, noisiness)`.
    ///
    /// # Errors
    /// Rejects `noisiness` outside [0, 1], `num_points == 0`, and the
    /// degenerate field parameters refused by [`WaveField::generate`].
    pub fn generate(config: PlanarConfig) -> Result<Self, PlanarError> {
        if !(0.0..=1.0).contains(&config.noisiness) {
            return Err(PlanarError::invalid_parameter(
                "noisiness",
                config.noisiness.to_string(),
                "0.0 <= noisiness <= 1.0",
            ));
        }
        if config.num_points == 0 {
            return Err(PlanarError::invalid_parameter(
                "num_points",
                "0",
                "num_points >= 1",
            ));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let field = WaveField::generate(&mut rng, config.complexity, config.xylim)?;

        let (low, high) = config.xylim;
        let mut points = Array2::zeros((config.num_points, 2));
        for mut row in points.rows_mut() {
            row[0] = rng.gen_range(low..high);
            row[1] = rng.gen_range(low..high);
        }

        let amplitude = field.evaluate(&points)?;

        let base_threshold = 0.5 * (1.0 - config.noisiness);
        let mut labels = Array1::zeros(config.num_points);
        for (label, &value) in labels.iter_mut().zip(amplitude.iter()) {
            let jitter = config.noisiness * rng.gen::<f64>();
            *label = u8::from(value > base_threshold + jitter);
        }

        Ok(Self {
            points,
            labels,
            field,
            config,
        })
    }

    /// The ground-truth amplitude field behind the labels.
    ///
    /// Note that [`WaveField::evaluate`] renormalizes per batch, so the
    /// surface it reports depends on the batch it is asked about.
    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// Ground-truth amplitude of an arbitrary batch, delegating to the
    /// stored field.
    pub fn amplitude(&self, points: &Array2<f64>) -> Result<Array1<f64>, PlanarError> {
        self.field.evaluate(points)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Count of (label 0, label 1) samples
    pub fn label_counts(&self) -> (usize, usize) {
        let positives = self.labels.iter().filter(|&&label| label == 1).count();
        (self.labels.len() - positives, positives)
    }
}
