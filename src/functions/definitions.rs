//! Built-in function table
//!
//! The signal kernels come from [`crate::math`]. Inside a formula, `rect` and
//! `tri` always have width 1: `rect(f/4)` scales the argument, it does not
//! widen the pulse. The closed-form sublanguage reads the same text as a
//! width of 4 instead; see [`crate::closed_form`].

use super::registry::FunctionDefinition;
use crate::math;

static DEFINITIONS: [FunctionDefinition; 12] = [
    // Signal kernels
    FunctionDefinition {
        name: "rect",
        summary: "unit rectangular pulse, 1 on |x| <= 1/2",
        eval: |x| math::rect(x, 1.0),
    },
    FunctionDefinition {
        name: "tri",
        summary: "unit triangular pulse, 1 - |x| on |x| <= 1",
        eval: |x| math::tri(x, 1.0),
    },
    FunctionDefinition {
        name: "sinc",
        summary: "normalized sinc, sin(pi x)/(pi x)",
        eval: math::sinc,
    },
    FunctionDefinition {
        name: "gauss",
        summary: "gaussian exp(-x^2)",
        eval: math::gauss,
    },
    FunctionDefinition {
        name: "exp",
        summary: "two-sided decay exp(-|x|)",
        eval: math::exp_decay,
    },
    FunctionDefinition {
        name: "step",
        summary: "heaviside step, 1/2 at the origin",
        eval: math::step,
    },
    FunctionDefinition {
        name: "delta",
        summary: "finite impulse of half-width 0.1 and unit area",
        eval: math::delta_default,
    },
    // Elementary
    FunctionDefinition {
        name: "sin",
        summary: "sine",
        eval: f64::sin,
    },
    FunctionDefinition {
        name: "cos",
        summary: "cosine",
        eval: f64::cos,
    },
    FunctionDefinition {
        name: "tan",
        summary: "tangent",
        eval: f64::tan,
    },
    FunctionDefinition {
        name: "abs",
        summary: "absolute value",
        eval: f64::abs,
    },
    FunctionDefinition {
        name: "sqrt",
        summary: "square root, NaN for negative input",
        eval: f64::sqrt,
    },
];

/// Return all function definitions for populating the registry
pub(crate) fn all_definitions() -> &'static [FunctionDefinition] {
    &DEFINITIONS
}
