//! Signal Formula Plotting Library
//!
//! Turns a textual formula for a 1-D signal `S(f)` into sampled points, a
//! plotting domain and an area estimate.
//!
//! # Features
//! - Recursive-descent parser for `+ - * /`, parentheses, unary minus,
//!   the variable `f` (or `t`), `pi` and the built-ins rect, tri, sinc,
//!   gauss, exp, step, delta, sin, cos, tan, abs, sqrt
//! - Forgiving parsing: anything unrecognized evaluates to zero and is
//!   reported as a [`Diagnostic`] instead of an error
//! - Closed-form mode for sums of shifted, scaled rect/tri pulses with
//!   exact support detection
//! - Sampling with automatic domain detection and trapezoidal area
//!
//! # Usage Examples
//!
//! ## General formulas
//! ```
//! use signal_plot::plot;
//!
//! let result = plot("2*gauss(f - 3)");
//! assert!(result.area > 3.5 && result.area < 3.6); // 2*sqrt(pi)
//! assert!(result.domain_min < 3.0 && result.domain_max > 3.0);
//! ```
//!
//! ## Closed-form pulses
//! ```
//! use signal_plot::plot_closed_form;
//!
//! let result = plot_closed_form("rect((f)/4)");
//! assert_eq!((result.domain_min, result.domain_max), (-12.0, 12.0));
//! ```
//!
//! ## Inspecting a parse
//! ```
//! use signal_plot::parse;
//!
//! let parsed = parse("sinc(f) + bogus(f)");
//! assert!(!parsed.is_clean());
//! assert_eq!(parsed.expr.to_string(), "sinc(f)+0");
//! ```

mod ast;
pub mod chart;
pub mod closed_form;
mod display;
mod error;
pub mod functions;
pub mod math;
mod parser;
pub mod sampler;
pub mod signal;
pub mod traits;
pub mod visitor;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{BinaryOp, Expr, ExprKind};
pub use chart::ChartConfig;
pub use closed_form::{ClosedForm, PulseKind, SignalDescriptor, parse_formula, split_top_level};
pub use error::{ConfigError, Diagnostic, Span};
pub use parser::{Parsed, normalize, parse, parse_with_limits};
pub use sampler::{PlotResult, SamplePoint, Sampler, SamplerConfig};
pub use signal::Signal;

/// Default maximum nesting of groups, calls and negations
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// Default maximum number of nodes in a parsed formula
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Plot a general formula with the default sampler
///
/// Never fails: blank or hopeless input gives an empty result on the
/// default `[-10, 10]` window.
///
/// # Example
/// ```
/// let result = signal_plot::plot("1/(f)");
/// // the pole at 0 is dropped, everything else is kept
/// assert_eq!(result.points.len(), 8000);
/// ```
pub fn plot(formula: &str) -> PlotResult {
    Sampler::new().plot(formula)
}

/// Plot a sum of rect/tri pulses with the default sampler
///
/// Terms outside the closed form are dropped (and logged); blank input gives
/// an empty result on `[-30, 30]`.
pub fn plot_closed_form(formula: &str) -> PlotResult {
    Sampler::new().plot_closed_form(formula)
}
