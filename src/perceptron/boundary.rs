use serde::{Serialize, Deserialize};

/// Decision boundary `w1*x1 + w2*x2 + b = 0` of a 2-D linear classifier,
/// captured for plotting.
///
/// A line can only be written as `x2 = slope*x1 + intercept` while `w2 != 0`.
/// The other two cases are kept as explicit variants so no infinite or NaN
/// slope ever leaves this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryLine {
    Sloped { slope: f64, intercept: f64 },
    /// `w2` is zero (or so small the slope overflows): the boundary is the
    /// vertical line `x1 = -b / w1`.
    Vertical { x1: f64 },
    /// `w1 == w2 == 0`, or non-finite parameters: no boundary can be placed.
    Undefined,
}

impl BoundaryLine {
    pub fn from_params(weights: [f64; 2], bias: f64) -> BoundaryLine {
        let [w1, w2] = weights;
        if !(w1.is_finite() && w2.is_finite() && bias.is_finite()) {
            return BoundaryLine::Undefined;
        }
        if w2 != 0.0 {
            let (slope, intercept) = (-w1 / w2, -bias / w2);
            if slope.is_finite() && intercept.is_finite() {
                return BoundaryLine::Sloped { slope, intercept };
            }
        }
        // A near-zero w2 overflows the slope; the line is then vertical
        // as long as w1 can still place it.
        if w1 != 0.0 {
            let x1 = -bias / w1;
            if x1.is_finite() {
                return BoundaryLine::Vertical { x1 };
            }
        }
        BoundaryLine::Undefined
    }

    /// `(slope, intercept)` for a sloped line.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        match *self {
            BoundaryLine::Sloped { slope, intercept } => Some((slope, intercept)),
            _ => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !matches!(self, BoundaryLine::Sloped { .. })
    }
}
