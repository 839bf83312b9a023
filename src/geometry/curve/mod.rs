use crate::math::Point2;

/// A parametric curve in the plane.
///
/// The tessellator only ever evaluates a curve on `[0, 1]`, plus a small probe
/// step past each sample for numerical differentiation. Implementations should be
/// pure: evaluating twice at the same `t` must give the same point.
///
/// Any `Fn(f64) -> Point2` is a curve, so closures can be passed directly.
pub trait ParametricCurve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;
}

impl<F> ParametricCurve for F
where
    F: Fn(f64) -> Point2,
{
    fn evaluate(&self, t: f64) -> Point2 {
        self(t)
    }
}
