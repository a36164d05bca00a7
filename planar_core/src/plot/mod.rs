//! Decision-surface rendering and scatter overlays.
//!
//! Everything here draws onto caller-owned [`plotters`] drawing areas; no
//! ambient figure state is read or mutated. The [`Predictor`] trait is the
//! boundary between the renderer and whatever produced the scores: the
//! generating [`WaveField`], a trained classifier, or an ad-hoc closure
//! wrapped in [`FnPredictor`].

pub mod grid;
pub mod scatter;
pub mod surface;

pub use grid::SurfaceGrid;
pub use scatter::{plot_two_class_scatter, scatter_onto};
pub use surface::{render_decision_surface, render_surface_png, SurfaceOptions, SurfaceTarget};

use ndarray::{Array2, Axis};
use plotters::style::RGBColor;

use crate::error::PlanarError;
use crate::field::WaveField;

/// Score source consumed by the surface renderer.
///
/// `predict` receives an n×2 batch of (x, y) rows and returns either one
/// column of scores nominally in [0, 1] or two columns of per-class
/// probabilities with the positive class second. The renderer does not
/// validate the score range; out-of-range values are clipped by the fixed
/// color scale.
pub trait Predictor {
    fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>, PlanarError>;
}

/// Adapter turning a plain closure into a [`Predictor`].
pub struct FnPredictor<F>(pub F);

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>, PlanarError> {
        Ok((self.0)(points))
    }
}

impl Predictor for WaveField {
    fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>, PlanarError> {
        Ok(self.evaluate(points)?.insert_axis(Axis(1)))
    }
}

/// Map a score in [0, 1] onto a fixed diverging red → yellow → blue scale.
///
/// The scale is pinned to [0, 1] independent of the data range, so surfaces
/// rendered across calls stay visually comparable. Inputs outside [0, 1]
/// are clamped.
pub fn diverging_rgb(value: f64) -> RGBColor {
    const LOW: (f64, f64, f64) = (215.0, 48.0, 39.0);
    const MID: (f64, f64, f64) = (255.0, 255.0, 191.0);
    const HIGH: (f64, f64, f64) = (69.0, 117.0, 180.0);

    let t = value.clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };

    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}
