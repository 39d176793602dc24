//! View-models backing the two interactive demos.
//!
//! | View-model | Input | Output |
//! |------------|-------|--------|
//! | [`VectorNormViewModel`] | vector `(x, y)` | L2 norm and label |
//! | [`SurfaceNormViewModel`] | norm order `p` | Lp field over a grid and contour levels |
//!
//! Each view-model owns its numeric state outright. Presentation code calls
//! the update operation on an input event and redraws from the returned value.

pub mod surface;
pub mod vector;

pub use surface::{SurfaceNormViewModel, SurfaceUpdate};
pub use vector::{format_label, VectorNormViewModel, VectorUpdate};
