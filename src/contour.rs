//! Contour level selection for norm fields.
//!
//! Given a requested number of levels, picks "nice" iso-values the way a
//! max-N tick locator with `levels + 1` bins does: the raw step
//! `span / (levels + 1)` is rounded up to `{1, 2, 2.5, 5, 10} × 10^k`, and
//! every multiple of that step strictly inside the field's `(min, max)`
//! becomes a level. Levels at the extremes are dropped since their iso-curves
//! collapse to a point or fill a region. The presentation layer traces the
//! actual curves; this module only decides where they go.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Mantissas a level step may take before scaling by a power of ten.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Slack for float error when testing level bounds.
const EPS: f64 = 1e-9;

/// Largest level count honoured when choosing the step.
pub const MAX_CONTOUR_LEVELS: usize = 1000;

/// Iso-value levels for one norm field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContourSpec {
    /// Number of levels that was requested
    pub levels: usize,
    /// Concrete level values, ascending, strictly inside the field's range
    pub values: Vec<f64>,
}

impl ContourSpec {
    /// Choose up to roughly `levels` contour values for `field`.
    ///
    /// Non-finite samples are ignored. A field with no finite samples yields
    /// no values. When no step multiple lies strictly inside the range (e.g.
    /// a flat field) the single value `min` is used. Requests above
    /// [`MAX_CONTOUR_LEVELS`] are treated as that many.
    pub fn from_field(field: &Array2<f64>, levels: usize) -> Self {
        let (min, max) = field
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        let values = if min > max || levels == 0 {
            Vec::new()
        } else if min == max {
            vec![min]
        } else {
            let bins = levels.min(MAX_CONTOUR_LEVELS) + 1;
            let step = nice_step((max - min) / bins as f64);
            let first = (min / step).floor() as i64;
            let last = (max / step).ceil() as i64;
            let slack = EPS * step;
            let inside: Vec<f64> = (first..=last)
                .map(|k| k as f64 * step)
                .filter(|&v| v > min + slack && v < max - slack)
                .collect();
            if inside.is_empty() {
                vec![min]
            } else {
                inside
            }
        };

        Self { levels, values }
    }

    /// Level labels formatted to one decimal place.
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|v| format!("{:.1}", v)).collect()
    }

    /// Number of concrete levels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no level could be placed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Round `raw` (> 0) up to the next nice step.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let scaled = raw / magnitude;
    let mantissa = NICE_STEPS
        .iter()
        .copied()
        .find(|&m| scaled <= m + EPS)
        .unwrap_or(10.0);
    mantissa * magnitude
}
