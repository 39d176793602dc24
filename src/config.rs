//! Demo configuration.
//!
//! Each option controls only the initial extent and resolution of a demo,
//! never the norm math. Both configs deserialize with missing fields filled
//! from [`Default`].

use serde::{Deserialize, Serialize};

use crate::contour::MAX_CONTOUR_LEVELS;
use crate::error::NormError;

/// Configuration for the L2 vector demo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorDemoConfig {
    /// Initial x component
    pub initial_x: f64,
    /// Initial y component
    pub initial_y: f64,
    /// Lower bound of both component sliders
    pub slider_min: f64,
    /// Upper bound of both component sliders
    pub slider_max: f64,
    /// Lower limit of both plot axes
    pub plot_min: f64,
    /// Upper limit of both plot axes
    pub plot_max: f64,
}

impl Default for VectorDemoConfig {
    fn default() -> Self {
        Self {
            initial_x: 3.0,
            initial_y: 4.0,
            slider_min: -10.0,
            slider_max: 10.0,
            plot_min: -12.0,
            plot_max: 12.0,
        }
    }
}

impl VectorDemoConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, NormError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are finite and every range is non-empty.
    pub fn validate(&self) -> Result<(), NormError> {
        check_finite("initial_x", self.initial_x)?;
        check_finite("initial_y", self.initial_y)?;
        check_range("slider", (self.slider_min, self.slider_max))?;
        check_range("plot", (self.plot_min, self.plot_max))?;
        Ok(())
    }
}

/// Configuration for the Lp surface demo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceDemoConfig {
    /// Sampled x interval, endpoints inclusive
    pub x_range: (f64, f64),
    /// Sampled y interval, endpoints inclusive
    pub y_range: (f64, f64),
    /// Samples per axis
    pub grid_size: usize,
    /// Initial norm order
    pub n_init: f64,
    /// Smallest accepted norm order
    pub n_min: f64,
    /// Largest accepted norm order
    pub n_max: f64,
    /// Slider step for the norm order
    pub p_step: f64,
    /// Requested number of contour levels
    pub contour_levels: usize,
}

impl Default for SurfaceDemoConfig {
    fn default() -> Self {
        Self {
            x_range: (-10.0, 10.0),
            y_range: (-10.0, 10.0),
            grid_size: 25,
            n_init: 2.0,
            n_min: 0.0,
            n_max: 10.0,
            p_step: 0.1,
            contour_levels: 10,
        }
    }
}

impl SurfaceDemoConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, NormError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges, grid resolution, norm-order bounds and level count.
    ///
    /// Norm orders must satisfy `0 <= n_min <= n_init <= n_max`, and
    /// `contour_levels` must lie in `1..=MAX_CONTOUR_LEVELS`.
    pub fn validate(&self) -> Result<(), NormError> {
        check_range("x_range", self.x_range)?;
        check_range("y_range", self.y_range)?;

        if self.grid_size < 2 {
            return Err(NormError::InvalidConfig(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }

        check_finite("n_init", self.n_init)?;
        check_finite("n_min", self.n_min)?;
        check_finite("n_max", self.n_max)?;
        if !(0.0 <= self.n_min && self.n_min <= self.n_init && self.n_init <= self.n_max) {
            return Err(NormError::InvalidConfig(format!(
                "norm order bounds must satisfy 0 <= n_min <= n_init <= n_max, got {} / {} / {}",
                self.n_min, self.n_init, self.n_max
            )));
        }

        if !(self.p_step.is_finite() && self.p_step > 0.0) {
            return Err(NormError::InvalidConfig(format!(
                "p_step must be positive, got {}",
                self.p_step
            )));
        }

        if !(1..=MAX_CONTOUR_LEVELS).contains(&self.contour_levels) {
            return Err(NormError::InvalidConfig(format!(
                "contour_levels must be in 1..={}, got {}",
                MAX_CONTOUR_LEVELS, self.contour_levels
            )));
        }

        Ok(())
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), NormError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NormError::InvalidConfig(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

pub(crate) fn check_range(name: &str, (lo, hi): (f64, f64)) -> Result<(), NormError> {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok(())
    } else {
        Err(NormError::InvalidConfig(format!(
            "{} must be a finite interval with lo < hi, got ({}, {})",
            name, lo, hi
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(VectorDemoConfig::default().validate().is_ok());
        assert!(SurfaceDemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_surface_defaults() {
        let config = SurfaceDemoConfig::default();
        assert_eq!(config.x_range, (-10.0, 10.0));
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.n_init, 2.0);
        assert_eq!(config.contour_levels, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SurfaceDemoConfig::from_json(r#"{"grid_size": 50}"#).unwrap();
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.n_max, 10.0);
    }

    #[test]
    fn test_vector_json() {
        let config = VectorDemoConfig::from_json(r#"{"initial_x": -1.5}"#).unwrap();
        assert_eq!(config.initial_x, -1.5);
        assert_eq!(config.initial_y, 4.0);
    }

    #[test]
    fn test_malformed_json() {
        let result = SurfaceDemoConfig::from_json("{not json");
        assert!(matches!(result, Err(NormError::Serialization(_))));
    }

    #[test]
    fn test_grid_size_too_small() {
        let config = SurfaceDemoConfig {
            grid_size: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NormError::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_range() {
        let config = SurfaceDemoConfig {
            x_range: (5.0, -5.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_n_min() {
        let config = SurfaceDemoConfig {
            n_min: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_n_init_outside_bounds() {
        let config = SurfaceDemoConfig {
            n_init: 11.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_contour_levels() {
        let config = SurfaceDemoConfig {
            contour_levels: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_contour_levels() {
        let config = SurfaceDemoConfig {
            contour_levels: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NormError::InvalidConfig(_))));

        let config = SurfaceDemoConfig {
            contour_levels: MAX_CONTOUR_LEVELS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_vector() {
        let config = VectorDemoConfig {
            initial_y: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = SurfaceDemoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SurfaceDemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
