//! Regular evaluation meshes for surface rendering.

use ndarray::{Array1, Array2};

use crate::error::PlanarError;

/// A regular mesh over a rectangular region at fixed resolution.
///
/// Points are flattened row-major with y as the outer axis, so a value
/// vector produced by evaluating the flattened batch reshapes back into
/// `(rows, cols)` with row index selecting y and column index selecting x.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    xs: Array1<f64>,
    ys: Array1<f64>,
    points: Array2<f64>,
    resolution: f64,
}

impl SurfaceGrid {
    /// Build a grid over `[xlim] × [ylim]`.
    ///
    /// The step count along each axis is `ceil((max - min) / resolution)`,
    /// starting at the lower bound.
    ///
    /// # Errors
    /// Rejects non-positive or non-finite resolutions and unordered or
    /// non-finite limits.
    pub fn build(
        xlim: (f64, f64),
        ylim: (f64, f64),
        resolution: f64,
    ) -> Result<Self, PlanarError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(PlanarError::invalid_parameter(
                "resolution",
                resolution.to_string(),
                "a finite value > 0",
            ));
        }
        for (name, (low, high)) in [("xlim", xlim), ("ylim", ylim)] {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(PlanarError::invalid_parameter(
                    name,
                    format!("({}, {})", low, high),
                    "finite bounds with low < high",
                ));
            }
        }

        let xs = axis_steps(xlim, resolution);
        let ys = axis_steps(ylim, resolution);

        let mut points = Array2::zeros((xs.len() * ys.len(), 2));
        let mut row = 0;
        for &y in ys.iter() {
            for &x in xs.iter() {
                points[[row, 0]] = x;
                points[[row, 1]] = y;
                row += 1;
            }
        }

        Ok(Self {
            xs,
            ys,
            points,
            resolution,
        })
    }

    /// `(rows, cols)` shape of the mesh: rows along y, columns along x.
    pub fn shape(&self) -> (usize, usize) {
        (self.ys.len(), self.xs.len())
    }

    /// Total number of mesh points.
    pub fn num_points(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// The flattened point batch, one (x, y) row per mesh point.
    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    /// X coordinates of the mesh columns.
    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    /// Y coordinates of the mesh rows.
    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Step size between adjacent mesh points.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Fold a flat value vector (aligned with [`points`](Self::points))
    /// back into the mesh shape.
    pub fn reshape(&self, values: Array1<f64>) -> Result<Array2<f64>, PlanarError> {
        if values.len() != self.num_points() {
            return Err(PlanarError::invalid_parameter(
                "values",
                format!("{} values", values.len()),
                format!("exactly {} values, one per mesh point", self.num_points()),
            ));
        }
        values
            .into_shape(self.shape())
            .map_err(|err| PlanarError::invalid_parameter("values", err.to_string(), "mesh shape"))
    }
}

fn axis_steps((low, high): (f64, f64), resolution: f64) -> Array1<f64> {
    let count = ((high - low) / resolution).ceil() as usize;
    Array1::from_iter((0..count).map(|step| low + step as f64 * resolution))
}
