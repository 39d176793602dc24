//! Interactive demo sessions.
//!
//! A session owns a view-model and the sliders that drive it. The
//! presentation collaborator implements [`VectorPresenter`] or
//! [`SurfacePresenter`], forwards slider drags to the session and calls
//! `render` to redraw from the session's state. Presenters keep their own
//! rendering handles; no numeric state lives on their side.

pub mod surface;
pub mod vector;

pub use surface::SurfaceNormDemo;
pub use vector::VectorNormDemo;

use ndarray::Array2;

use crate::contour::ContourSpec;
use crate::grid::SampleGrid;

/// Drawing surface for the L2 vector demo.
pub trait VectorPresenter {
    /// Fix both plot axes to `[min, max]`.
    fn set_axes(&mut self, min: f64, max: f64);

    /// Draw the arrow from the origin to `tip`, replacing the previous one.
    fn draw_vector(&mut self, tip: (f64, f64));

    /// Show the norm readout, replacing the previous text.
    fn show_label(&mut self, text: &str);
}

/// Drawing surface for the Lp surface demo.
pub trait SurfacePresenter {
    /// Draw `field` as a colour-mapped image spanning `extent`
    /// (`[x_lo, x_hi, y_lo, y_hi]`, origin at the lower left).
    fn draw_surface(&mut self, field: &Array2<f64>, extent: [f64; 4]);

    /// Trace and label iso-curves of `field` at the given levels.
    fn draw_contours(&mut self, grid: &SampleGrid, field: &Array2<f64>, contours: &ContourSpec);
}
