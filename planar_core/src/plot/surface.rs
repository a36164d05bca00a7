//! Decision-surface rendering.
//!
//! Evaluates a [`Predictor`] over a regular mesh and fills the mesh cells
//! with a fixed diverging color scale. The caller always owns the drawing
//! backend; the renderer only ever draws onto the target it is handed.

use std::path::Path;

use ndarray::{Array1, Array2};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::grid::SurfaceGrid;
use super::scatter::scatter_onto;
use super::{diverging_rgb, Predictor};
use crate::error::PlanarError;

/// Rendering options for a decision surface
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Mesh step size along both axes
    pub resolution: f64,
    /// Threshold scores into {0, 1} before rendering
    pub binary: bool,
    /// Threshold used when `binary` is set
    pub cutoff: f64,
    /// Panel title, drawn only when the renderer owns the layout
    pub title: Option<String>,
    /// X axis description, drawn only when the renderer owns the layout
    pub xlabel: Option<String>,
    /// Y axis description, drawn only when the renderer owns the layout
    pub ylabel: Option<String>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            resolution: 0.05,
            binary: false,
            cutoff: 0.5,
            title: None,
            xlabel: None,
            ylabel: None,
        }
    }
}

/// Where a surface is rendered.
///
/// The distinction matters for layout ownership: a `Figure` target lets the
/// renderer split the area into panels and draw titles, while an `Axes`
/// target is a caller-managed panel the renderer must not subdivide or
/// decorate.
pub enum SurfaceTarget<'a, DB: DrawingBackend> {
    /// The renderer owns the whole area and may split it into panels
    Figure(&'a DrawingArea<DB, Shift>),
    /// A caller-managed single panel
    Axes(&'a DrawingArea<DB, Shift>),
}

/// Render a predictor's decision surface, optionally overlaying sample
/// points and a second panel showing a ground-truth surface.
///
/// Two-column predictor output is reduced to its second (positive-class)
/// column before thresholding or filling. The fill uses a color scale
/// pinned to [0, 1] regardless of the score range.
///
/// A ground-truth panel requires the renderer to manage a two-panel
/// layout, so combining `SurfaceTarget::Axes` with `true_surface` is
/// rejected before any evaluation or drawing takes place. The ground-truth
/// panel itself is drawn undecorated, without overlay and without a
/// further nested panel.
pub fn render_decision_surface<DB: DrawingBackend>(
    target: SurfaceTarget<'_, DB>,
    predictor: &dyn Predictor,
    xlim: (f64, f64),
    ylim: (f64, f64),
    options: &SurfaceOptions,
    overlay: Option<(&Array2<f64>, &Array1<u8>)>,
    true_surface: Option<&dyn Predictor>,
) -> Result<(), PlanarError> {
    if matches!(&target, SurfaceTarget::Axes(_)) && true_surface.is_some() {
        return Err(PlanarError::conflicting_layout(
            "a ground-truth panel needs a renderer-managed layout; pass a figure target or drop the ground-truth surface",
        ));
    }

    match target {
        SurfaceTarget::Axes(axes) => {
            draw_surface_panel(axes, predictor, xlim, ylim, options, overlay, false)
        }
        SurfaceTarget::Figure(figure) => {
            if let Some(truth) = true_surface {
                let panels = figure.split_evenly((1, 2));
                draw_surface_panel(&panels[0], predictor, xlim, ylim, options, overlay, true)?;
                let truth_options = SurfaceOptions {
                    resolution: options.resolution,
                    ..SurfaceOptions::default()
                };
                draw_surface_panel(&panels[1], truth, xlim, ylim, &truth_options, None, false)
            } else {
                draw_surface_panel(figure, predictor, xlim, ylim, options, overlay, true)
            }
        }
    }
}

/// Render a decision surface straight to a PNG file.
///
/// Convenience wrapper that owns a bitmap backend for the given path and
/// size, fills it white, and delegates to [`render_decision_surface`] with
/// a figure target.
#[allow(clippy::too_many_arguments)]
pub fn render_surface_png<P: AsRef<Path>>(
    path: P,
    size: (u32, u32),
    predictor: &dyn Predictor,
    xlim: (f64, f64),
    ylim: (f64, f64),
    options: &SurfaceOptions,
    overlay: Option<(&Array2<f64>, &Array1<u8>)>,
    true_surface: Option<&dyn Predictor>,
) -> Result<(), PlanarError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| PlanarError::draw(err.to_string()))?;
        }
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| PlanarError::draw(err.to_string()))?;

    render_decision_surface(
        SurfaceTarget::Figure(&root),
        predictor,
        xlim,
        ylim,
        options,
        overlay,
        true_surface,
    )?;

    root.present()
        .map_err(|err| PlanarError::draw(err.to_string()))
}

/// Draw one surface panel: mesh evaluation, column reduction, optional
/// thresholding, cell fill, optional scatter overlay.
fn draw_surface_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    predictor: &dyn Predictor,
    xlim: (f64, f64),
    ylim: (f64, f64),
    options: &SurfaceOptions,
    overlay: Option<(&Array2<f64>, &Array1<u8>)>,
    decorate: bool,
) -> Result<(), PlanarError> {
    let grid = SurfaceGrid::build(xlim, ylim, options.resolution)?;

    let output = predictor.predict(grid.points())?;
    if output.nrows() != grid.num_points() {
        return Err(PlanarError::invalid_parameter(
            "predictor output",
            format!("{} rows for {} mesh points", output.nrows(), grid.num_points()),
            "one row per mesh point",
        ));
    }

    let mut values = positive_class_column(output)?;
    if options.binary {
        values.mapv_inplace(|score| if score < options.cutoff { 0.0 } else { 1.0 });
    }
    let surface = grid.reshape(values)?;

    let labeled = options.xlabel.is_some() || options.ylabel.is_some();

    let mut builder = ChartBuilder::on(area);
    if decorate {
        if labeled {
            builder
                .margin(8)
                .x_label_area_size(28)
                .y_label_area_size(40);
        }
        if let Some(title) = &options.title {
            builder.caption(title, ("sans-serif", 22));
        }
    }
    let mut chart = builder
        .build_cartesian_2d(xlim.0..xlim.1, ylim.0..ylim.1)
        .map_err(|err| PlanarError::draw(err.to_string()))?;

    if decorate && labeled {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(options.xlabel.clone().unwrap_or_default())
            .y_desc(options.ylabel.clone().unwrap_or_default())
            .draw()
            .map_err(|err| PlanarError::draw(err.to_string()))?;
    }

    let resolution = grid.resolution();
    let cells = surface.indexed_iter().map(|((row, col), &value)| {
        let x = grid.xs()[col];
        let y = grid.ys()[row];
        Rectangle::new(
            [(x, y), (x + resolution, y + resolution)],
            diverging_rgb(value).filled(),
        )
    });
    chart
        .draw_series(cells)
        .map_err(|err| PlanarError::draw(err.to_string()))?;

    if let Some((points, labels)) = overlay {
        scatter_onto(chart.plotting_area(), points, labels)?;
    }

    Ok(())
}

fn positive_class_column(output: Array2<f64>) -> Result<Array1<f64>, PlanarError> {
    match output.ncols() {
        1 => Ok(output.column(0).to_owned()),
        2 => Ok(output.column(1).to_owned()),
        other => Err(PlanarError::invalid_parameter(
            "predictor output",
            format!("{} columns", other),
            "one score column, or two per-class columns",
        )),
    }
}
