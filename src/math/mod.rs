//! Mathematical primitives for normviz.
//!
//! - [`norms`] — L2 and Lp norm computations, scalar and elementwise

pub mod norms;

pub use norms::{l2_norm, l2_norm_field, l2_norm_sq, lp_norm, lp_norm_field, NormKind};
