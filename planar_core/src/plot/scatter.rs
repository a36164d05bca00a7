//! Two-class scatter rendering.

use ndarray::{Array1, Array2};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::PlanarError;

/// Marker color for label-0 samples
pub const CLASS_ZERO_COLOR: RGBColor = RED;
/// Marker color for label-1 samples
pub const CLASS_ONE_COLOR: RGBColor = BLUE;

const MARKER_RADIUS: i32 = 2;

/// Draw a labeled point set onto a caller-owned drawing area.
///
/// The area is mapped to the data coordinates given by `xlim`/`ylim` (y
/// increasing upward); label-0 points are drawn in red, label-1 points in
/// blue.
pub fn plot_two_class_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &Array2<f64>,
    labels: &Array1<u8>,
    xlim: (f64, f64),
    ylim: (f64, f64),
) -> Result<(), PlanarError> {
    let (width, height) = area.dim_in_pixel();
    let mapped = area.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
        xlim.0..xlim.1,
        ylim.1..ylim.0,
        (0..width as i32, 0..height as i32),
    ));
    scatter_onto(&mapped, points, labels)
}

/// Draw markers onto axes that already carry a data coordinate system,
/// e.g. the plotting area of a surface chart.
pub fn scatter_onto<DB: DrawingBackend>(
    area: &DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &Array2<f64>,
    labels: &Array1<u8>,
) -> Result<(), PlanarError> {
    if points.ncols() != 2 {
        return Err(PlanarError::invalid_parameter(
            "points",
            format!("{} columns", points.ncols()),
            "an n x 2 batch of (x, y) rows",
        ));
    }
    if points.nrows() != labels.len() {
        return Err(PlanarError::invalid_parameter(
            "labels",
            format!("{} labels for {} points", labels.len(), points.nrows()),
            "one label per point",
        ));
    }

    for (point, &label) in points.rows().into_iter().zip(labels.iter()) {
        let color = if label == 0 {
            CLASS_ZERO_COLOR
        } else {
            CLASS_ONE_COLOR
        };
        area.draw(&Circle::new(
            (point[0], point[1]),
            MARKER_RADIUS,
            color.filled(),
        ))
        .map_err(|err| PlanarError::draw(err.to_string()))?;
    }

    Ok(())
}
