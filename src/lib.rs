//! # normviz: interactive vector norm visualizations
//!
//! Numeric core and view-models for two teaching demos over the 2-D plane:
//! an L2 demo where the user drags a vector and reads off its length, and
//! an Lp demo where the user drags the norm order `p` and watches the norm
//! surface and its level sets change.
//!
//! ## Norm functions
//!
//! - [`l2_norm()`] - Euclidean length of `(x, y)`
//! - [`lp_norm()`] - Piecewise Lp family: Minkowski (`p >= 1`), unnormalized
//!   quasi-norm (`0 < p < 1`) and counting norm (`p == 0`)
//! - [`lp_norm_field()`] - Elementwise Lp norm over a sample grid
//!
//! ## View-models
//!
//! [`VectorNormViewModel`] and [`SurfaceNormViewModel`] hold the numeric
//! state of each demo and return everything a renderer needs after each
//! update. [`demo`] wires them to [`Slider`]s and a presenter trait.

#![deny(missing_docs)]

pub mod config;
pub mod contour;
pub mod controls;
pub mod demo;
pub mod error;
pub mod grid;
pub mod math;
pub mod viewmodel;

// Re-exports
pub use config::{SurfaceDemoConfig, VectorDemoConfig};
pub use contour::ContourSpec;
pub use controls::Slider;
pub use demo::{SurfaceNormDemo, SurfacePresenter, VectorNormDemo, VectorPresenter};
pub use error::NormError;
pub use grid::SampleGrid;
pub use math::{l2_norm, l2_norm_field, lp_norm, lp_norm_field, NormKind};
pub use viewmodel::{SurfaceNormViewModel, SurfaceUpdate, VectorNormViewModel, VectorUpdate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Python bindings via PyO3, so a Python plotting stack can act as presenter
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2};
    use pyo3::prelude::*;

    use crate::{NormError, SurfaceDemoConfig};

    fn norm_err(e: NormError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
    }

    #[pyfunction]
    fn l2_norm(x: f64, y: f64) -> f64 {
        crate::l2_norm(x, y)
    }

    #[pyfunction]
    fn lp_norm(x: f64, y: f64, p: f64) -> PyResult<f64> {
        crate::lp_norm(x, y, p).map_err(norm_err)
    }

    #[pyclass(name = "VectorNormViewModel")]
    struct PyVectorNormViewModel {
        inner: crate::VectorNormViewModel,
    }

    #[pymethods]
    impl PyVectorNormViewModel {
        #[new]
        fn new() -> Self {
            Self {
                inner: crate::VectorNormViewModel::new(),
            }
        }

        fn set_vector(&mut self, x: f64, y: f64) -> (f64, String) {
            let update = self.inner.set_vector(x, y);
            (update.norm, update.label)
        }
    }

    #[pyclass(name = "SurfaceNormViewModel")]
    struct PySurfaceNormViewModel {
        inner: crate::SurfaceNormViewModel,
    }

    #[pymethods]
    impl PySurfaceNormViewModel {
        #[new]
        #[pyo3(signature = (
            x_range=(-10.0, 10.0),
            y_range=(-10.0, 10.0),
            grid_size=25,
            n_init=2.0,
            n_min=0.0,
            n_max=10.0,
            contour_levels=10
        ))]
        #[allow(clippy::too_many_arguments)]
        fn new(
            x_range: (f64, f64),
            y_range: (f64, f64),
            grid_size: usize,
            n_init: f64,
            n_min: f64,
            n_max: f64,
            contour_levels: usize,
        ) -> PyResult<Self> {
            let config = SurfaceDemoConfig {
                x_range,
                y_range,
                grid_size,
                n_init,
                n_min,
                n_max,
                contour_levels,
                ..Default::default()
            };
            let inner = crate::SurfaceNormViewModel::new(config).map_err(norm_err)?;
            Ok(Self { inner })
        }

        fn set_p<'py>(
            &mut self,
            py: Python<'py>,
            p: f64,
        ) -> PyResult<(&'py PyArray2<f64>, Vec<f64>)> {
            let update = self.inner.set_p(p).map_err(norm_err)?;
            Ok((update.field.into_pyarray(py), update.contours.values))
        }

        fn grid<'py>(&self, py: Python<'py>) -> (&'py PyArray2<f64>, &'py PyArray2<f64>) {
            let grid = self.inner.grid();
            (
                grid.x().clone().into_pyarray(py),
                grid.y().clone().into_pyarray(py),
            )
        }
    }

    #[pymodule]
    fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(l2_norm, m)?)?;
        m.add_function(wrap_pyfunction!(lp_norm, m)?)?;
        m.add_class::<PyVectorNormViewModel>()?;
        m.add_class::<PySurfaceNormViewModel>()?;
        Ok(())
    }
}
