use planar_lab_core::{PlanarConfig, PlanarDataset, PlanarError};

#[test]
fn generation_is_deterministic_per_config() {
    let config = PlanarConfig {
        complexity: 8,
        noisiness: 0.25,
        num_points: 200,
        xylim: (-5.0, 5.0),
        seed: 1234,
    };

    let first = PlanarDataset::generate(config.clone()).unwrap();
    let second = PlanarDataset::generate(config).unwrap();

    assert_eq!(first.points, second.points);
    assert_eq!(first.labels, second.labels);
    assert_eq!(first.field().components(), second.field().components());
}

#[test]
fn different_seeds_produce_different_datasets() {
    let base = PlanarConfig::default();
    let first = PlanarDataset::generate(PlanarConfig { seed: 1, ..base.clone() }).unwrap();
    let second = PlanarDataset::generate(PlanarConfig { seed: 2, ..base }).unwrap();
    assert_ne!(first.points, second.points);
}

#[test]
fn amplitude_is_standardized_and_squashed() {
    let dataset = PlanarDataset::generate(PlanarConfig {
        num_points: 512,
        seed: 7,
        ..Default::default()
    })
    .unwrap();

    let amplitude = dataset.amplitude(&dataset.points).unwrap();
    assert_eq!(amplitude.len(), 512);
    assert!(amplitude.iter().all(|&value| value > 0.0 && value < 1.0));

    // Undo the squash: the normalized pre-squash batch must have mean 0 and
    // standard deviation 1.
    let z: Vec<f64> = amplitude.iter().map(|&p| (p / (1.0 - p)).ln()).collect();
    let mean = z.iter().sum::<f64>() / z.len() as f64;
    let variance = z.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / z.len() as f64;
    assert!(mean.abs() < 1e-6);
    assert!((variance.sqrt() - 1.0).abs() < 1e-6);
}

#[test]
fn zero_noisiness_thresholds_exactly_at_half() {
    for seed in [3, 11, 42] {
        let dataset = PlanarDataset::generate(PlanarConfig {
            noisiness: 0.0,
            num_points: 256,
            seed,
            ..Default::default()
        })
        .unwrap();

        let amplitude = dataset.amplitude(&dataset.points).unwrap();
        for (&label, &value) in dataset.labels.iter().zip(amplitude.iter()) {
            assert_eq!(label == 1, value > 0.5, "seed {} disagrees", seed);
        }
    }
}

#[test]
fn full_noisiness_scrambles_labels() {
    let dataset = PlanarDataset::generate(PlanarConfig {
        noisiness: 1.0,
        num_points: 2000,
        seed: 42,
        ..Default::default()
    })
    .unwrap();

    let (zeros, ones) = dataset.label_counts();
    assert!(zeros > 0 && ones > 0);

    // The hard 0.5 cut no longer decides labels: a noticeable share of
    // samples must disagree with it.
    let amplitude = dataset.amplitude(&dataset.points).unwrap();
    let agreeing = dataset
        .labels
        .iter()
        .zip(amplitude.iter())
        .filter(|(&label, &value)| (label == 1) == (value > 0.5))
        .count();
    let agreement = agreeing as f64 / dataset.len() as f64;
    assert!(agreement < 0.95);
    assert!(agreement > 0.3);
}

#[test]
fn example_scenario_is_reproducible() {
    let config = PlanarConfig {
        complexity: 1,
        noisiness: 0.0,
        num_points: 4,
        xylim: (-1.0, 1.0),
        seed: 42,
    };

    let dataset = PlanarDataset::generate(config.clone()).unwrap();
    assert_eq!(dataset.points.dim(), (4, 2));
    assert_eq!(dataset.labels.len(), 4);
    assert!(dataset.labels.iter().all(|&label| label <= 1));

    // The returned field accepts the same batch and yields squashed values.
    let amplitude = dataset.field().evaluate(&dataset.points).unwrap();
    assert_eq!(amplitude.len(), 4);
    assert!(amplitude.iter().all(|&value| value > 0.0 && value < 1.0));

    let again = PlanarDataset::generate(config).unwrap();
    assert_eq!(dataset.points, again.points);
    assert_eq!(dataset.labels, again.labels);
}

#[test]
fn degenerate_parameters_fail_explicitly() {
    let zero_complexity = PlanarConfig {
        complexity: 0,
        ..Default::default()
    };
    assert!(matches!(
        PlanarDataset::generate(zero_complexity),
        Err(PlanarError::InvalidParameter { .. })
    ));

    let zero_upper = PlanarConfig {
        xylim: (-5.0, 0.0),
        ..Default::default()
    };
    assert!(matches!(
        PlanarDataset::generate(zero_upper),
        Err(PlanarError::InvalidParameter { .. })
    ));
}
