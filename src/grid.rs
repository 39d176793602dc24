//! Fixed sample grid for norm surfaces.
//!
//! A [`SampleGrid`] is the Cartesian product of two evenly spaced axes,
//! stored in meshgrid layout: `x()[[i, j]] == x_axis()[j]` and
//! `y()[[i, j]] == y_axis()[i]`. Row index walks y, column index walks x,
//! so a field computed over the grid can be displayed with its origin at
//! the lower left.

use ndarray::{Array1, Array2};

use crate::config::check_range;
use crate::error::NormError;

/// Immutable grid of `(x, y)` sample points.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    x_axis: Array1<f64>,
    y_axis: Array1<f64>,
    x: Array2<f64>,
    y: Array2<f64>,
}

impl SampleGrid {
    /// Build a `grid_size × grid_size` grid spanning both ranges (endpoints inclusive).
    ///
    /// # Errors
    ///
    /// [`NormError::InvalidConfig`] if `grid_size < 2` or a range is empty or
    /// non-finite.
    pub fn new(
        x_range: (f64, f64),
        y_range: (f64, f64),
        grid_size: usize,
    ) -> Result<Self, NormError> {
        check_range("x_range", x_range)?;
        check_range("y_range", y_range)?;
        if grid_size < 2 {
            return Err(NormError::InvalidConfig(format!(
                "grid_size must be at least 2, got {}",
                grid_size
            )));
        }

        let x_axis = Array1::linspace(x_range.0, x_range.1, grid_size);
        let y_axis = Array1::linspace(y_range.0, y_range.1, grid_size);

        let shape = (grid_size, grid_size);
        let x = Array2::from_shape_fn(shape, |(_, j)| x_axis[j]);
        let y = Array2::from_shape_fn(shape, |(i, _)| y_axis[i]);

        Ok(Self {
            x_axis,
            y_axis,
            x,
            y,
        })
    }

    /// X coordinate of every sample point.
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// Y coordinate of every sample point.
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// The 1-D x axis samples.
    pub fn x_axis(&self) -> &Array1<f64> {
        &self.x_axis
    }

    /// The 1-D y axis samples.
    pub fn y_axis(&self) -> &Array1<f64> {
        &self.y_axis
    }

    /// `(rows, cols)` of the grid; every field computed over it has this shape.
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// `[x_lo, x_hi, y_lo, y_hi]`, the image extent for drawing a field.
    pub fn extent(&self) -> [f64; 4] {
        let last = self.x_axis.len() - 1;
        [
            self.x_axis[0],
            self.x_axis[last],
            self.y_axis[0],
            self.y_axis[last],
        ]
    }
}
