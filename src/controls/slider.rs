//! Continuous-range slider model.
//!
//! Holds the value behind a slider widget: bounds, optional step snapping
//! and a list of change observers. Drawing the widget is left to the
//! presentation layer, which forwards drag events to [`Slider::set_value`].

use std::fmt;

use log::trace;

use crate::config::check_range;
use crate::error::NormError;

/// Handle returned by [`Slider::on_changed`], used to disconnect an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Observer = Box<dyn FnMut(f64)>;

/// A bounded scalar input with change notification.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use normviz::Slider;
///
/// let seen = Rc::new(Cell::new(0.0));
/// let sink = Rc::clone(&seen);
///
/// let mut slider = Slider::new("P", 0.0, 10.0, 2.0).unwrap().with_step(0.1).unwrap();
/// slider.on_changed(move |v| sink.set(v));
///
/// slider.set_value(12.0);
/// assert_eq!(seen.get(), 10.0);
/// ```
pub struct Slider {
    label: String,
    min: f64,
    max: f64,
    step: Option<f64>,
    init: f64,
    value: f64,
    next_id: usize,
    observers: Vec<(ObserverId, Observer)>,
}

impl Slider {
    /// Create a slider over `[min, max]` starting at `init` (clamped into range).
    ///
    /// # Errors
    ///
    /// [`NormError::InvalidConfig`] if the range is empty or non-finite, or
    /// `init` is not finite.
    pub fn new(label: impl Into<String>, min: f64, max: f64, init: f64) -> Result<Self, NormError> {
        let label = label.into();
        check_range(&label, (min, max))?;
        if !init.is_finite() {
            return Err(NormError::InvalidConfig(format!(
                "slider {} initial value must be finite, got {}",
                label, init
            )));
        }

        let init = init.clamp(min, max);
        Ok(Self {
            label,
            min,
            max,
            step: None,
            init,
            value: init,
            next_id: 0,
            observers: Vec::new(),
        })
    }

    /// Snap values to `min + k * step`.
    ///
    /// # Errors
    ///
    /// [`NormError::InvalidConfig`] if `step` is not positive and finite.
    pub fn with_step(mut self, step: f64) -> Result<Self, NormError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(NormError::InvalidConfig(format!(
                "slider {} step must be positive, got {}",
                self.label, step
            )));
        }
        self.step = Some(step);
        self.init = self.constrain(self.init);
        self.value = self.init;
        Ok(self)
    }

    /// Clamp and snap `value`, store it and notify every observer.
    ///
    /// Returns the stored value. NaN input leaves the slider unchanged and
    /// notifies nobody.
    pub fn set_value(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }

        self.value = self.constrain(value);
        trace!("slider {} -> {}", self.label, self.value);

        let current = self.value;
        for (_, observer) in self.observers.iter_mut() {
            observer(current);
        }
        current
    }

    /// Return to the initial value, notifying observers.
    pub fn reset(&mut self) -> f64 {
        self.set_value(self.init)
    }

    /// Register a callback invoked with the new value after every change.
    pub fn on_changed<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(f64) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a registered callback. Returns `false` if `id` was not registered.
    pub fn disconnect(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Widget label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `(min, max)` bounds.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Snap step, if any.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    fn constrain(&self, value: f64) -> f64 {
        let value = value.clamp(self.min, self.max);
        match self.step {
            Some(step) => {
                let k = ((value - self.min) / step).round();
                (self.min + k * step).clamp(self.min, self.max)
            }
            None => value,
        }
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("label", &self.label)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
