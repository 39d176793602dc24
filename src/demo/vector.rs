//! L2 vector demo session: two component sliders and a norm readout.

use crate::config::VectorDemoConfig;
use crate::controls::Slider;
use crate::error::NormError;
use crate::viewmodel::{VectorNormViewModel, VectorUpdate};

use super::VectorPresenter;

/// Session wiring the `x_1` / `x_2` sliders to a [`VectorNormViewModel`].
#[derive(Debug)]
pub struct VectorNormDemo {
    config: VectorDemoConfig,
    view_model: VectorNormViewModel,
    x_slider: Slider,
    y_slider: Slider,
}

impl VectorNormDemo {
    /// Build the session from a validated configuration.
    ///
    /// The view-model starts from the sliders' stored values, so initial
    /// components outside `[slider_min, slider_max]` are clamped.
    pub fn new(config: VectorDemoConfig) -> Result<Self, NormError> {
        config.validate()?;

        let x_slider = Slider::new("x_1", config.slider_min, config.slider_max, config.initial_x)?;
        let y_slider = Slider::new("x_2", config.slider_min, config.slider_max, config.initial_y)?;
        let mut view_model = VectorNormViewModel::from_config(&config);
        view_model.set_vector(x_slider.value(), y_slider.value());

        Ok(Self {
            config,
            view_model,
            x_slider,
            y_slider,
        })
    }

    /// Handle a drag of the `x_1` slider.
    pub fn drag_x(&mut self, value: f64) -> VectorUpdate {
        self.x_slider.set_value(value);
        self.sync()
    }

    /// Handle a drag of the `x_2` slider.
    pub fn drag_y(&mut self, value: f64) -> VectorUpdate {
        self.y_slider.set_value(value);
        self.sync()
    }

    /// Return both sliders to their initial positions.
    pub fn reset(&mut self) -> VectorUpdate {
        self.x_slider.reset();
        self.y_slider.reset();
        self.sync()
    }

    /// Redraw axes, arrow and readout from the current state.
    pub fn render<P: VectorPresenter + ?Sized>(&self, presenter: &mut P) {
        presenter.set_axes(self.config.plot_min, self.config.plot_max);
        presenter.draw_vector(self.view_model.vector());
        presenter.show_label(&self.view_model.label());
    }

    /// The underlying view-model.
    pub fn view_model(&self) -> &VectorNormViewModel {
        &self.view_model
    }

    /// The `x_1` and `x_2` sliders.
    pub fn sliders(&self) -> (&Slider, &Slider) {
        (&self.x_slider, &self.y_slider)
    }

    fn sync(&mut self) -> VectorUpdate {
        self.view_model
            .set_vector(self.x_slider.value(), self.y_slider.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        axes: Option<(f64, f64)>,
        tip: Option<(f64, f64)>,
        label: String,
    }

    impl VectorPresenter for Recorder {
        fn set_axes(&mut self, min: f64, max: f64) {
            self.axes = Some((min, max));
        }

        fn draw_vector(&mut self, tip: (f64, f64)) {
            self.tip = Some(tip);
        }

        fn show_label(&mut self, text: &str) {
            self.label = text.to_string();
        }
    }

    #[test]
    fn test_initial_render() {
        let demo = VectorNormDemo::new(VectorDemoConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        demo.render(&mut recorder);

        assert_eq!(recorder.axes, Some((-12.0, 12.0)));
        assert_eq!(recorder.tip, Some((3.0, 4.0)));
        assert!(recorder.label.contains("5.00"));
    }

    #[test]
    fn test_drag_updates_one_component() {
        let mut demo = VectorNormDemo::new(VectorDemoConfig::default()).unwrap();
        let update = demo.drag_x(0.0);
        assert_eq!(demo.view_model().vector(), (0.0, 4.0));
        assert!((update.norm - 4.0).abs() < 1e-12);

        let update = demo.drag_y(-3.0);
        assert_eq!(demo.view_model().vector(), (0.0, -3.0));
        assert_eq!(update.label, "‖x‖ = 3.00");
    }

    #[test]
    fn test_drag_clamped_by_slider() {
        let mut demo = VectorNormDemo::new(VectorDemoConfig::default()).unwrap();
        demo.drag_x(50.0);
        demo.drag_y(-50.0);
        assert_eq!(demo.view_model().vector(), (10.0, -10.0));
    }

    #[test]
    fn test_initial_vector_clamped_to_sliders() {
        let config = VectorDemoConfig {
            initial_x: 15.0,
            ..Default::default()
        };
        let mut demo = VectorNormDemo::new(config).unwrap();
        let (x_slider, _) = demo.sliders();
        assert_eq!(x_slider.value(), 10.0);
        assert_eq!(demo.view_model().vector(), (10.0, 4.0));

        let mut recorder = Recorder::default();
        demo.render(&mut recorder);
        assert_eq!(recorder.tip, Some((10.0, 4.0)));

        // moving the other slider leaves x where the slider shows it
        let before = demo.view_model().label();
        let update = demo.drag_y(4.0);
        assert_eq!(demo.view_model().vector(), (10.0, 4.0));
        assert_eq!(update.label, before);
    }

    #[test]
    fn test_reset() {
        let mut demo = VectorNormDemo::new(VectorDemoConfig::default()).unwrap();
        demo.drag_x(-8.0);
        let update = demo.reset();
        assert_eq!(demo.view_model().vector(), (3.0, 4.0));
        assert!((update.norm - 5.0).abs() < 1e-12);
    }
}
