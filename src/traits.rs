use num_traits::{Float, FloatConst, FromPrimitive};
use std::fmt::{Debug, Display};

/// Below this magnitude `sinc` returns its limit value instead of dividing.
pub(crate) const SINC_EPSILON: f64 = 1e-10;

/// Default half-width of the finite `delta` impulse.
pub const DELTA_EPSILON: f64 = 0.1;

/// A trait comprising all operations required for the signal kernels.
///
/// This aggregates `num_traits::Float` (providing sin, exp, abs, etc.),
/// `FloatConst` (PI) and the formatting traits used in diagnostics.
/// The interpreter always instantiates it with `f64`.
pub trait MathScalar: Float + FloatConst + FromPrimitive + Debug + Display + 'static {
    /// `1/2` in this scalar type
    #[inline]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where T: Float + FloatConst + FromPrimitive + Debug + Display + 'static {}

/// Check if a sample is negligible for support detection
#[inline]
pub(crate) fn is_negligible(y: f64, threshold: f64) -> bool {
    y.abs() <= threshold
}
