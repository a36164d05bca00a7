use planar_lab_core::config::ConfigError;
use planar_lab_core::logging;
use planar_lab_core::{
    render_surface_png, ExperimentConfig, PlanarDataset, SurfaceGrid, SurfaceOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    println!(
        "Generating {} samples: complexity={} noisiness={} seed={}",
        config.planar.num_points,
        config.planar.complexity,
        config.planar.noisiness,
        config.planar.seed
    );

    let dataset = PlanarDataset::generate(config.to_planar_config())?;
    let (zeros, ones) = dataset.label_counts();
    println!("Labels: {} negative, {} positive", zeros, ones);
    logging::log_generation(&dataset)?;

    let xylim = config.planar.xylim;
    let options = SurfaceOptions {
        resolution: config.surface.resolution,
        title: Some("wave field amplitude".to_string()),
        xlabel: Some("x".to_string()),
        ylabel: Some("y".to_string()),
        ..SurfaceOptions::default()
    };

    render_surface_png(
        "out/decision_surface.png",
        (config.surface.width, config.surface.height),
        dataset.field(),
        xylim,
        xylim,
        &options,
        Some((&dataset.points, &dataset.labels)),
        None,
    )?;

    let grid = SurfaceGrid::build(xylim, xylim, config.surface.resolution)?;
    let (rows, cols) = grid.shape();
    logging::log_render(rows, cols, false)?;

    println!("Demo complete. Wrote out/decision_surface.png");
    Ok(())
}

fn load_config() -> Result<ExperimentConfig, ConfigError> {
    ExperimentConfig::load_from_file("config/experiment.toml").or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        Ok(ExperimentConfig::default())
    })
}
