//! Plane-wave amplitude fields for synthetic classification signals.
//!
//! A [`WaveField`] superposes a handful of randomized plane waves into a
//! smooth scalar field over the plane. Batch-normalizing and squashing the
//! superposition yields a value in (0, 1) per point, which the sample
//! generator thresholds into class labels.

use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PlanarError;

/// One sinusoidal term of the superposed field.
///
/// Immutable after sampling; the scale is chosen so the component's visual
/// amplitude is independent of its wavevector magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveComponent {
    /// Spatial frequency vector (nonzero)
    pub wavevector: [f64; 2],
    /// Phase offset in [0, 2π)
    pub phase: f64,
    /// Per-component amplitude factor
    pub amplitude_scale: f64,
}

impl WaveComponent {
    /// Sample one component. Later indices draw from a wider frequency band,
    /// so higher `complexity` adds finer spatial detail on top of the
    /// low-frequency terms.
    fn sample(rng: &mut StdRng, index: usize, upper: f64) -> Result<Self, PlanarError> {
        let band_low = index as f64 / 2.0;
        let band_high = index as f64 + 1.0;

        let mut wavevector = [0.0_f64; 2];
        for value in wavevector.iter_mut() {
            *value = rng.gen_range(band_low..band_high) / upper;
        }
        // Independent sign flip and rescale per axis
        for value in wavevector.iter_mut() {
            *value *= 2.0 * (rng.gen::<f64>() - 0.5);
        }

        let phase = rng.gen_range(0.0..2.0 * PI);

        let norm = (wavevector[0] * wavevector[0] + wavevector[1] * wavevector[1]).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return Err(PlanarError::degenerate(
                "wave component",
                "wavevector norm is zero or non-finite",
            ));
        }

        Ok(Self {
            wavevector,
            phase,
            amplitude_scale: upper / norm,
        })
    }

    /// Evaluate this component at a single point.
    pub fn response(&self, x: f64, y: f64) -> f64 {
        let projection = self.wavevector[0] * x + self.wavevector[1] * y;
        self.amplitude_scale * (projection + self.phase).sin()
    }
}

/// A fixed set of plane-wave components and their superposed amplitude.
///
/// Built once from an owned random stream, then evaluated as a pure
/// function over point batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveField {
    components: Vec<WaveComponent>,
}

impl WaveField {
    /// Sample a new field with `complexity` components over the square
    /// `[low, high]²`.
    ///
    /// # Arguments
    /// * `rng` - Caller-owned random stream; draws are consumed in component
    ///   order
    /// * `complexity` - Number of components (≥ 1)
    /// * `xylim` - `(low, high)` extent used to scale spatial frequencies
    ///
    /// # Errors
    /// `complexity == 0`, unordered or non-finite bounds, and a zero upper
    /// bound are rejected (the amplitude scale divides by the upper bound).
    pub fn generate(
        rng: &mut StdRng,
        complexity: usize,
        xylim: (f64, f64),
    ) -> Result<Self, PlanarError> {
        if complexity == 0 {
            return Err(PlanarError::invalid_parameter(
                "complexity",
                "0",
                "complexity >= 1 (an empty field has constant amplitude)",
            ));
        }

        let (low, high) = xylim;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(PlanarError::invalid_parameter(
                "xylim",
                format!("({}, {})", low, high),
                "finite bounds with low < high",
            ));
        }
        if high == 0.0 {
            return Err(PlanarError::invalid_parameter(
                "xylim",
                format!("({}, {})", low, high),
                "nonzero upper bound (frequencies are scaled by 1/high)",
            ));
        }

        let mut components = Vec::with_capacity(complexity);
        for index in 0..complexity {
            components.push(WaveComponent::sample(rng, index, high)?);
        }

        Ok(Self { components })
    }

    /// The sampled components, in draw order.
    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    /// Number of components.
    pub fn complexity(&self) -> usize {
        self.components.len()
    }

    /// Superposed amplitude at each point, before normalization.
    ///
    /// `points` is an n×2 batch of (x, y) rows.
    pub fn raw_amplitude(&self, points: &Array2<f64>) -> Array1<f64> {
        Array1::from_iter(points.rows().into_iter().map(|point| {
            self.components
                .iter()
                .map(|component| component.response(point[0], point[1]))
                .sum::<f64>()
        }))
    }

    /// Normalized, squashed amplitude over a point batch: raw superposition,
    /// centered on the batch mean, scaled by the batch standard deviation,
    /// then passed through a logistic squash into (0, 1).
    ///
    /// Normalization is a property of the whole batch, not of individual
    /// points: evaluating the same coordinate alongside different neighbors
    /// can yield a different value. Callers comparing a "ground truth"
    /// surface against model output should evaluate both on the same batch.
    ///
    /// # Errors
    /// An empty batch, a batch that is not n×2, and a batch with zero
    /// amplitude variance (e.g. a single point) are rejected.
    pub fn evaluate(&self, points: &Array2<f64>) -> Result<Array1<f64>, PlanarError> {
        if points.nrows() == 0 {
            return Err(PlanarError::empty_batch("points"));
        }
        if points.ncols() != 2 {
            return Err(PlanarError::invalid_parameter(
                "points",
                format!("{} columns", points.ncols()),
                "an n x 2 batch of (x, y) rows",
            ));
        }

        let raw = self.raw_amplitude(points);
        let count = raw.len() as f64;
        let mean = raw.sum() / count;
        let variance = raw.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / count;
        let std = variance.sqrt();

        if std == 0.0 || !std.is_finite() {
            return Err(PlanarError::degenerate(
                "amplitude batch",
                "standard deviation over the batch is zero or non-finite",
            ));
        }

        Ok(raw.mapv(|value| logistic((value - mean) / std)))
    }
}

/// Logistic squash mapping the real line into (0, 1).
fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid_points(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, 2), |(row, col)| {
            let t = row as f64 / n as f64 * 10.0 - 5.0;
            if col == 0 {
                t
            } else {
                -t * 0.5
            }
        })
    }

    #[test]
    fn test_generate_rejects_zero_complexity() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = WaveField::generate(&mut rng, 0, (-5.0, 5.0));
        assert!(matches!(
            result,
            Err(PlanarError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_generate_rejects_zero_upper_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = WaveField::generate(&mut rng, 3, (-5.0, 0.0));
        assert!(matches!(
            result,
            Err(PlanarError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_generate_rejects_unordered_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = WaveField::generate(&mut rng, 3, (5.0, -5.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_component_count_matches_complexity() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = WaveField::generate(&mut rng, 12, (-5.0, 5.0)).unwrap();
        assert_eq!(field.complexity(), 12);
    }

    #[test]
    fn test_components_have_nonzero_wavevectors() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = WaveField::generate(&mut rng, 10, (-5.0, 5.0)).unwrap();
        for component in field.components() {
            let norm = (component.wavevector[0].powi(2) + component.wavevector[1].powi(2)).sqrt();
            assert!(norm > 0.0);
            assert!((component.amplitude_scale - 5.0 / norm).abs() < 1e-12);
        }
    }

    #[test]
    fn test_evaluate_outputs_open_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = WaveField::generate(&mut rng, 5, (-5.0, 5.0)).unwrap();
        let amplitude = field.evaluate(&grid_points(64)).unwrap();
        assert_eq!(amplitude.len(), 64);
        assert!(amplitude.iter().all(|&value| value > 0.0 && value < 1.0));
    }

    #[test]
    fn test_evaluate_is_batch_normalized() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = WaveField::generate(&mut rng, 5, (-5.0, 5.0)).unwrap();
        let points = grid_points(128);
        let amplitude = field.evaluate(&points).unwrap();

        // Invert the squash; the pre-squash values must have batch mean 0
        // and batch standard deviation 1.
        let z: Vec<f64> = amplitude
            .iter()
            .map(|&p| (p / (1.0 - p)).ln())
            .collect();
        let mean = z.iter().sum::<f64>() / z.len() as f64;
        let variance = z.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / z.len() as f64;
        assert!(mean.abs() < 1e-6);
        assert!((variance.sqrt() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_evaluate_rejects_empty_batch() {
        let mut rng = StdRng::seed_from_u64(2);
        let field = WaveField::generate(&mut rng, 3, (-5.0, 5.0)).unwrap();
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            field.evaluate(&empty),
            Err(PlanarError::EmptyBatch { .. })
        ));
    }

    #[test]
    fn test_evaluate_rejects_single_point_batch() {
        // One point has zero variance, so the batch normalization is
        // undefined.
        let mut rng = StdRng::seed_from_u64(2);
        let field = WaveField::generate(&mut rng, 3, (-5.0, 5.0)).unwrap();
        let single = Array2::from_shape_vec((1, 2), vec![0.5, -0.5]).unwrap();
        assert!(matches!(
            field.evaluate(&single),
            Err(PlanarError::DegenerateBatch { .. })
        ));
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let field_a = WaveField::generate(&mut rng_a, 6, (-5.0, 5.0)).unwrap();
        let field_b = WaveField::generate(&mut rng_b, 6, (-5.0, 5.0)).unwrap();
        assert_eq!(field_a.components(), field_b.components());
    }
}
