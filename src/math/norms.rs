//! Norm computations for 2-component vectors.
//!
//! Scalar forms ([`l2_norm`], [`lp_norm`]) are used by the vector demo;
//! the elementwise forms ([`l2_norm_field`], [`lp_norm_field`]) evaluate the
//! same formulas over every point of a sample grid.
//!
//! The Lp family is piecewise in the order `p`:
//!
//! | Order | Kind | Value |
//! |-------|------|-------|
//! | `p >= 1` | [`NormKind::Minkowski`] | `(|x|^p + |y|^p)^(1/p)` |
//! | `0 < p < 1` | [`NormKind::Quasi`] | `|x|^p + |y|^p` |
//! | `p == 0` | [`NormKind::Counting`] | number of nonzero components |
//!
//! The quasi branch is left unnormalized (no `1/p` exponent).

use ndarray::{Array2, Zip};

use crate::error::NormError;

/// Compute the L2 (Euclidean) norm of `(x, y)`.
pub fn l2_norm(x: f64, y: f64) -> f64 {
    l2_norm_sq(x, y).sqrt()
}

/// Compute the squared L2 norm of `(x, y)` (avoids sqrt).
pub fn l2_norm_sq(x: f64, y: f64) -> f64 {
    x * x + y * y
}

/// Which branch of the Lp family a norm order selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormKind {
    /// `p == 0`: count of nonzero components
    Counting,
    /// `0 < p < 1`: unnormalized sum of powers
    Quasi,
    /// `p >= 1`: standard Minkowski norm
    Minkowski,
}

impl NormKind {
    /// Classify a norm order.
    ///
    /// Returns [`NormError::InvalidArgument`] for negative or NaN orders.
    pub fn from_order(p: f64) -> Result<Self, NormError> {
        if p.is_nan() {
            return Err(NormError::InvalidArgument(
                "norm order p must be a number".to_string(),
            ));
        }
        if p < 0.0 {
            return Err(NormError::InvalidArgument(format!(
                "norm order p = {} is negative",
                p
            )));
        }

        Ok(if p == 0.0 {
            NormKind::Counting
        } else if p < 1.0 {
            NormKind::Quasi
        } else {
            NormKind::Minkowski
        })
    }

    /// Evaluate this branch at `(x, y)` with order `p`.
    ///
    /// `p` must be the order this kind was classified from.
    fn eval(self, x: f64, y: f64, p: f64) -> f64 {
        match self {
            NormKind::Counting => count_nonzero(x) + count_nonzero(y),
            NormKind::Quasi => x.abs().powf(p) + y.abs().powf(p),
            NormKind::Minkowski => (x.abs().powf(p) + y.abs().powf(p)).powf(1.0 / p),
        }
    }
}

/// `0^0` is taken as 0, any other base to the zeroth power as 1.
fn count_nonzero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Compute the Lp norm of `(x, y)` for order `p`.
///
/// See the module docs for the piecewise definition.
///
/// # Errors
///
/// [`NormError::InvalidArgument`] if `p` is negative or NaN.
pub fn lp_norm(x: f64, y: f64, p: f64) -> Result<f64, NormError> {
    let kind = NormKind::from_order(p)?;
    Ok(kind.eval(x, y, p))
}

/// Elementwise [`l2_norm`] over equal-shape coordinate arrays.
pub fn l2_norm_field(x: &Array2<f64>, y: &Array2<f64>) -> Result<Array2<f64>, NormError> {
    check_same_shape(x, y)?;
    Ok(Zip::from(x).and(y).map_collect(|&a, &b| l2_norm(a, b)))
}

/// Elementwise [`lp_norm`] over equal-shape coordinate arrays.
///
/// The order is classified once, so every element follows the same branch.
pub fn lp_norm_field(x: &Array2<f64>, y: &Array2<f64>, p: f64) -> Result<Array2<f64>, NormError> {
    let kind = NormKind::from_order(p)?;
    check_same_shape(x, y)?;
    Ok(Zip::from(x).and(y).map_collect(|&a, &b| kind.eval(a, b, p)))
}

fn check_same_shape(x: &Array2<f64>, y: &Array2<f64>) -> Result<(), NormError> {
    if x.dim() != y.dim() {
        return Err(NormError::DimensionMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_l2_norm_3_4_5() {
        assert!((l2_norm(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_sq_3_4() {
        assert!((l2_norm_sq(3.0, 4.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_origin() {
        assert_eq!(l2_norm(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_l2_norm_single_axis() {
        assert!((l2_norm(-7.0, 0.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm_kind_classification() {
        assert_eq!(NormKind::from_order(0.0).unwrap(), NormKind::Counting);
        assert_eq!(NormKind::from_order(0.5).unwrap(), NormKind::Quasi);
        assert_eq!(NormKind::from_order(1.0).unwrap(), NormKind::Minkowski);
        assert_eq!(NormKind::from_order(10.0).unwrap(), NormKind::Minkowski);
    }

    #[test]
    fn test_negative_order_rejected() {
        let result = lp_norm(1.0, 1.0, -0.5);
        assert!(matches!(result, Err(NormError::InvalidArgument(_))));
    }

    #[test]
    fn test_nan_order_rejected() {
        assert!(matches!(
            NormKind::from_order(f64::NAN),
            Err(NormError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lp_matches_l2_at_p2() {
        assert!((lp_norm(3.0, 4.0, 2.0).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_l1_is_taxicab() {
        assert!((lp_norm(-3.0, 4.0, 1.0).unwrap() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_counting_norm() {
        assert_eq!(lp_norm(0.0, 0.0, 0.0).unwrap(), 0.0);
        assert_eq!(lp_norm(5.0, 0.0, 0.0).unwrap(), 1.0);
        assert_eq!(lp_norm(0.0, -2.0, 0.0).unwrap(), 1.0);
        assert_eq!(lp_norm(5.0, 7.0, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        assert_eq!(lp_norm(-0.0, 0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_quasi_branch_is_unnormalized() {
        // 4^0.5 + 9^0.5 = 5, whereas the normalized form would give 25
        assert!((lp_norm(4.0, 9.0, 0.5).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_field_matches_scalar() {
        let x = array![[-1.0, 0.0, 2.0], [3.0, -4.0, 0.5]];
        let y = array![[0.0, 0.0, -2.0], [4.0, 1.5, 0.0]];

        for &p in &[0.0, 0.3, 1.0, 2.0, 7.5] {
            let field = lp_norm_field(&x, &y, p).unwrap();
            assert_eq!(field.dim(), x.dim());
            for ((idx, &v), (&a, &b)) in field.indexed_iter().zip(x.iter().zip(y.iter())) {
                assert_eq!(v, lp_norm(a, b, p).unwrap(), "p={} at {:?}", p, idx);
            }
        }
    }

    #[test]
    fn test_l2_field() {
        let x = array![[3.0, 0.0]];
        let y = array![[4.0, -2.0]];
        let field = l2_norm_field(&x, &y).unwrap();
        assert!((field[[0, 0]] - 5.0).abs() < 1e-12);
        assert!((field[[0, 1]] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_field_dimension_mismatch() {
        let x = array![[1.0, 2.0]];
        let y = array![[1.0], [2.0]];
        assert_eq!(lp_norm_field(&x, &y, 2.0), Err(NormError::DimensionMismatch));
        assert_eq!(l2_norm_field(&x, &y), Err(NormError::DimensionMismatch));
    }

    #[test]
    fn test_field_counting_mask() {
        let x = array![[0.0, 1.0], [0.0, -3.0]];
        let y = array![[0.0, 0.0], [2.0, 8.0]];
        let field = lp_norm_field(&x, &y, 0.0).unwrap();
        assert_eq!(field, array![[0.0, 1.0], [1.0, 2.0]]);
    }
}
