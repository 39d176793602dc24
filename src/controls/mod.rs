//! Input controls driving the demos.
//!
//! - [`slider`] — bounded scalar input with step snapping and observers

pub mod slider;

pub use slider::{ObserverId, Slider};
