//! View-model for the Lp surface demo.
//!
//! Owns a fixed [`SampleGrid`] and the current norm order `p`. Every change
//! of `p` recomputes the whole norm field over the grid (no incremental
//! update) and re-derives the contour levels from it.

use log::debug;
use ndarray::Array2;

use crate::config::SurfaceDemoConfig;
use crate::contour::ContourSpec;
use crate::error::NormError;
use crate::grid::SampleGrid;
use crate::math::norms::lp_norm_field;

/// Result of a norm-order update, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceUpdate {
    /// Norm order actually applied (after clamping)
    pub p: f64,
    /// Lp norm at every grid point, same shape as the grid
    pub field: Array2<f64>,
    /// Contour levels for `field`
    pub contours: ContourSpec,
}

/// Holds the sample grid, the norm order and the current norm field.
///
/// # Example
///
/// ```rust
/// use normviz::{SurfaceDemoConfig, SurfaceNormViewModel};
///
/// let mut vm = SurfaceNormViewModel::new(SurfaceDemoConfig::default()).unwrap();
/// let update = vm.set_p(1.0).unwrap();
/// assert_eq!(update.field.dim(), (25, 25));
/// // corner (-10, -10) under L1
/// assert!((update.field[[0, 0]] - 20.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct SurfaceNormViewModel {
    config: SurfaceDemoConfig,
    grid: SampleGrid,
    p: f64,
    field: Array2<f64>,
    contours: ContourSpec,
}

impl SurfaceNormViewModel {
    /// Build the grid and the initial field at `config.n_init`.
    ///
    /// # Errors
    ///
    /// [`NormError::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: SurfaceDemoConfig) -> Result<Self, NormError> {
        config.validate()?;

        let grid = SampleGrid::new(config.x_range, config.y_range, config.grid_size)?;
        let p = config.n_init;
        let field = lp_norm_field(grid.x(), grid.y(), p)?;
        let contours = ContourSpec::from_field(&field, config.contour_levels);

        Ok(Self {
            config,
            grid,
            p,
            field,
            contours,
        })
    }

    /// Set the norm order and recompute the field.
    ///
    /// `p` is clamped into `[n_min, n_max]`; the applied value is reported in
    /// [`SurfaceUpdate::p`]. Equal orders produce identical fields.
    ///
    /// # Errors
    ///
    /// [`NormError::InvalidArgument`] if `p` is NaN.
    pub fn set_p(&mut self, p: f64) -> Result<SurfaceUpdate, NormError> {
        if p.is_nan() {
            return Err(NormError::InvalidArgument(
                "norm order p must be a number".to_string(),
            ));
        }

        let clamped = p.clamp(self.config.n_min, self.config.n_max);
        if clamped != p {
            debug!(
                "norm order {} clamped to {} (bounds [{}, {}])",
                p, clamped, self.config.n_min, self.config.n_max
            );
        }

        let field = lp_norm_field(self.grid.x(), self.grid.y(), clamped)?;
        let contours = ContourSpec::from_field(&field, self.config.contour_levels);

        self.p = clamped;
        self.field = field;
        self.contours = contours;

        debug!(
            "surface recomputed at p = {}: {} samples, {} contour levels",
            self.p,
            self.field.len(),
            self.contours.len()
        );

        Ok(self.current())
    }

    /// Snapshot of the current order, field and contours.
    pub fn current(&self) -> SurfaceUpdate {
        SurfaceUpdate {
            p: self.p,
            field: self.field.clone(),
            contours: self.contours.clone(),
        }
    }

    /// Current norm order.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Current norm field.
    pub fn field(&self) -> &Array2<f64> {
        &self.field
    }

    /// Contour levels of the current field.
    pub fn contours(&self) -> &ContourSpec {
        &self.contours
    }

    /// The fixed sample grid.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Configuration the view-model was built from.
    pub fn config(&self) -> &SurfaceDemoConfig {
        &self.config
    }
}
