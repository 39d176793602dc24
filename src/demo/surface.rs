//! Lp surface demo session: one norm-order slider and a contoured field.

use crate::config::SurfaceDemoConfig;
use crate::controls::Slider;
use crate::error::NormError;
use crate::viewmodel::{SurfaceNormViewModel, SurfaceUpdate};

use super::SurfacePresenter;

/// Session wiring the `P` slider to a [`SurfaceNormViewModel`].
#[derive(Debug)]
pub struct SurfaceNormDemo {
    view_model: SurfaceNormViewModel,
    p_slider: Slider,
}

impl SurfaceNormDemo {
    /// Build the grid, the `P` slider and the initial field.
    ///
    /// The first field is computed at the slider's snapped initial value,
    /// which differs from `n_init` when that is off the `p_step` grid.
    pub fn new(config: SurfaceDemoConfig) -> Result<Self, NormError> {
        let p_slider =
            Slider::new("P", config.n_min, config.n_max, config.n_init)?.with_step(config.p_step)?;
        let mut view_model = SurfaceNormViewModel::new(config)?;
        view_model.set_p(p_slider.value())?;

        Ok(Self {
            view_model,
            p_slider,
        })
    }

    /// Handle a drag of the `P` slider; the snapped value is applied.
    pub fn drag_p(&mut self, value: f64) -> Result<SurfaceUpdate, NormError> {
        let p = self.p_slider.set_value(value);
        self.view_model.set_p(p)
    }

    /// Redraw the surface and its contours from the current field.
    pub fn render<P: SurfacePresenter + ?Sized>(&self, presenter: &mut P) {
        let grid = self.view_model.grid();
        let field = self.view_model.field();
        presenter.draw_surface(field, grid.extent());
        presenter.draw_contours(grid, field, self.view_model.contours());
    }

    /// The underlying view-model.
    pub fn view_model(&self) -> &SurfaceNormViewModel {
        &self.view_model
    }

    /// The `P` slider.
    pub fn slider(&self) -> &Slider {
        &self.p_slider
    }
}
