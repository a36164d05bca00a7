//! 1D noisy regression samples for quick demos.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;

/// A 1D regression toy set: a quadratic trend with occasional dropouts.
#[derive(Debug, Clone)]
pub struct LineSamples {
    pub xs: Array1<f64>,
    pub ys: Array1<f64>,
}

impl LineSamples {
    /// Draw `num_points` x-values uniformly in (-5, 5), map them through
    /// `y = 5x + 10 + 0.1x²`, then zero each y with probability 0.05 to
    /// simulate sensor dropouts.
    pub fn generate(rng: &mut StdRng, num_points: usize) -> Self {
        let mut xs = Array1::zeros(num_points);
        for x in xs.iter_mut() {
            *x = rng.gen_range(-5.0..5.0);
        }

        let mut ys = xs.mapv(|x| 5.0 * x + 10.0 + 0.1 * x * x);
        for y in ys.iter_mut() {
            if rng.gen::<f64>() < 0.05 {
                *y = 0.0;
            }
        }

        Self { xs, ys }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the sample set is empty
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_generate_shapes_and_range() {
        let mut rng = StdRng::seed_from_u64(1337);
        let samples = LineSamples::generate(&mut rng, 30);

        assert_eq!(samples.len(), 30);
        assert!(samples.xs.iter().all(|&x| (-5.0..5.0).contains(&x)));
    }

    #[test]
    fn test_non_dropout_values_follow_trend() {
        let mut rng = StdRng::seed_from_u64(1337);
        let samples = LineSamples::generate(&mut rng, 100);

        for (&x, &y) in samples.xs.iter().zip(samples.ys.iter()) {
            let expected = 5.0 * x + 10.0 + 0.1 * x * x;
            assert!(y == 0.0 || (y - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);
        let a = LineSamples::generate(&mut rng_a, 30);
        let b = LineSamples::generate(&mut rng_b, 30);
        assert_eq!(a.xs, b.xs);
        assert_eq!(a.ys, b.ys);
    }
}
