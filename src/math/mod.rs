//! Primitive signal kernels
//!
//! Pure real-valued functions shared by the expression interpreter (through
//! the function registry) and the closed-form pulse evaluator. Every kernel
//! is total: no input produces a panic or a domain error, and only `sinc`
//! and `gauss` can propagate a NaN argument.

use crate::traits::{DELTA_EPSILON, MathScalar, SINC_EPSILON};


/// Rectangular pulse: 1 on `|x| <= width/2`, 0 elsewhere.
///
/// Both edges are included, so `rect(0.5, 1.0) == 1.0`.
pub fn rect<T: MathScalar>(x: T, width: T) -> T {
    if x.abs() <= width * T::half() {
        T::one()
    } else {
        T::zero()
    }
}

/// Triangular pulse of half-base `width`, peak 1 at the origin.
pub fn tri<T: MathScalar>(x: T, width: T) -> T {
    let ax = x.abs();
    if ax <= width {
        T::one() - ax / width
    } else {
        T::zero()
    }
}

/// Normalized sinc, `sin(pi x) / (pi x)` with the removable singularity filled in.
pub fn sinc<T: MathScalar>(x: T) -> T {
    let eps = T::from_f64(SINC_EPSILON).unwrap_or_else(T::epsilon);
    if x.abs() < eps {
        return T::one();
    }
    let arg = T::PI() * x;
    arg.sin() / arg
}

/// Gaussian bell `exp(-x^2)`
pub fn gauss<T: MathScalar>(x: T) -> T {
    (-(x * x)).exp()
}

/// Two-sided decaying exponential `exp(-|x|)`.
///
/// This is what the formula name `exp` means in this crate; there is no
/// plain `e^x` built-in.
pub fn exp_decay<T: MathScalar>(x: T) -> T {
    (-x.abs()).exp()
}

/// Heaviside step with the half-maximum convention at the origin
pub fn step<T: MathScalar>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        T::zero()
    } else {
        T::half()
    }
}

/// Finite-width impulse: a box of height `1/(2 eps)` on `|x| < eps`.
///
/// The box has unit area, so it approximates a Dirac delta for small `eps`.
pub fn delta<T: MathScalar>(x: T, eps: T) -> T {
    if x.abs() < eps {
        T::one() / (eps + eps)
    } else {
        T::zero()
    }
}

/// `delta` with the default half-width `DELTA_EPSILON`
pub fn delta_default(x: f64) -> f64 {
    delta(x, DELTA_EPSILON)
}

/// Round half away from zero to `digits` decimal places
pub fn round_to(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).round() / scale
}
