use ndarray::{Array1, Array2, Axis};
use planar_lab_core::{
    render_surface_png, FnPredictor, PlanarConfig, PlanarDataset, Predictor, SurfaceOptions,
};

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Plain logistic regression on the raw (x, y) coordinates, trained with
/// full-batch gradient descent. A linear model cannot follow the wavy
/// boundary, which is exactly what the side-by-side rendering shows.
fn train_logistic(
    points: &Array2<f64>,
    labels: &Array1<u8>,
    epochs: usize,
    learning_rate: f64,
) -> ([f64; 2], f64) {
    let mut weights = [0.0_f64; 2];
    let mut bias = 0.0_f64;
    let count = points.nrows() as f64;

    for _ in 0..epochs {
        let mut grad_w = [0.0_f64; 2];
        let mut grad_b = 0.0_f64;

        for (row, &label) in points.rows().into_iter().zip(labels.iter()) {
            let score = sigmoid(weights[0] * row[0] + weights[1] * row[1] + bias);
            let residual = score - f64::from(label);
            grad_w[0] += residual * row[0];
            grad_w[1] += residual * row[1];
            grad_b += residual;
        }

        weights[0] -= learning_rate * grad_w[0] / count;
        weights[1] -= learning_rate * grad_w[1] / count;
        bias -= learning_rate * grad_b / count;
    }

    (weights, bias)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PlanarConfig {
        complexity: 4,
        noisiness: 0.2,
        num_points: 512,
        ..Default::default()
    };
    let xylim = config.xylim;
    let dataset = PlanarDataset::generate(config)?;

    let (weights, bias) = train_logistic(&dataset.points, &dataset.labels, 400, 0.5);

    let correct = dataset
        .points
        .rows()
        .into_iter()
        .zip(dataset.labels.iter())
        .filter(|(row, &label)| {
            let score = sigmoid(weights[0] * row[0] + weights[1] * row[1] + bias);
            (score > 0.5) == (label == 1)
        })
        .count();
    println!(
        "Train accuracy: {:.3} (w = [{:.4}, {:.4}], b = {:.4})",
        correct as f64 / dataset.len() as f64,
        weights[0],
        weights[1],
        bias
    );

    let model = FnPredictor(move |points: &Array2<f64>| {
        points
            .map_axis(Axis(1), |row| {
                sigmoid(weights[0] * row[0] + weights[1] * row[1] + bias)
            })
            .insert_axis(Axis(1))
    });

    render_surface_png(
        "out/trained_surface.png",
        (1400, 700),
        &model,
        xylim,
        xylim,
        &SurfaceOptions {
            title: Some("logistic fit".to_string()),
            ..SurfaceOptions::default()
        },
        Some((&dataset.points, &dataset.labels)),
        Some(dataset.field() as &dyn Predictor),
    )?;

    println!("Wrote out/trained_surface.png (fit left, generating field right)");
    Ok(())
}
