//! View-model for the L2 vector demo.

use log::debug;

use crate::config::VectorDemoConfig;
use crate::math::norms::l2_norm;

/// Result of a vector update, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorUpdate {
    /// L2 norm of the new vector
    pub norm: f64,
    /// Display text, e.g. `‖x‖ = 5.00`
    pub label: String,
}

/// Format the norm readout shown next to the vector.
pub fn format_label(norm: f64) -> String {
    format!("‖x‖ = {:.2}", norm)
}

/// Holds the current vector and its L2 norm.
///
/// # Example
///
/// ```rust
/// use normviz::VectorNormViewModel;
///
/// let mut vm = VectorNormViewModel::new();
/// let update = vm.set_vector(6.0, 8.0);
/// assert!((update.norm - 10.0).abs() < 1e-12);
/// assert_eq!(update.label, "‖x‖ = 10.00");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VectorNormViewModel {
    x: f64,
    y: f64,
}

impl Default for VectorNormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorNormViewModel {
    /// Create a view-model holding the default vector `(3.0, 4.0)`.
    pub fn new() -> Self {
        Self::from_config(&VectorDemoConfig::default())
    }

    /// Create a view-model holding the configured initial vector.
    pub fn from_config(config: &VectorDemoConfig) -> Self {
        Self {
            x: config.initial_x,
            y: config.initial_y,
        }
    }

    /// Replace the vector and return its norm and label.
    ///
    /// Every real input is accepted; equal inputs give equal results.
    pub fn set_vector(&mut self, x: f64, y: f64) -> VectorUpdate {
        self.x = x;
        self.y = y;
        let update = self.current();
        debug!("vector set to ({}, {}), norm {:.4}", x, y, update.norm);
        update
    }

    /// Norm and label of the held vector.
    pub fn current(&self) -> VectorUpdate {
        let norm = self.norm();
        VectorUpdate {
            norm,
            label: format_label(norm),
        }
    }

    /// The held vector as `(x, y)`.
    pub fn vector(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// L2 norm of the held vector.
    pub fn norm(&self) -> f64 {
        l2_norm(self.x, self.y)
    }

    /// Label for the held vector.
    pub fn label(&self) -> String {
        format_label(self.norm())
    }
}
