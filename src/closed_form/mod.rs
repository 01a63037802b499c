//! Closed-form sublanguage: sums of shifted, scaled rect/tri pulses
//!
//! `2*tri((f-3)/4) - rect((f)/2)` is read as two [`SignalDescriptor`]s
//! instead of a general expression tree, which lets the sampler compute the
//! support domain exactly from the pulse extents.
//!
//! The divisor here is the pulse *width*: `rect((f)/4)` is 4 wide. The
//! general parser reads the same text as `rect` of the scaled argument
//! `f/4` with width 1, so the two modes disagree on what that formula
//! means. Each mode keeps its own reading.

mod split;
mod term;

pub use split::split_top_level;

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;
use crate::math;
use crate::parser::normalize;

/// Shape of a closed-form pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PulseKind {
    Rect,
    Tri,
}

impl PulseKind {
    /// Distance from the center to the edge of the support
    pub fn half_width(self, param: f64) -> f64 {
        match self {
            PulseKind::Rect => param / 2.0,
            PulseKind::Tri => param,
        }
    }

    /// Unit-height pulse of this shape centered on the origin
    pub fn kernel(self, x: f64, param: f64) -> f64 {
        match self {
            PulseKind::Rect => math::rect(x, param),
            PulseKind::Tri => math::tri(x, param),
        }
    }
}

impl std::fmt::Display for PulseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rect => write!(f, "rect"),
            Self::Tri => write!(f, "tri"),
        }
    }
}

/// One additive term: `amplitude * kind((x - center) / param)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalDescriptor {
    pub amplitude: f64,
    pub kind: PulseKind,
    pub center: f64,
    /// Full width for `rect`, half-base for `tri`
    pub param: f64,
}

impl SignalDescriptor {
    /// Contribution of this term at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.amplitude * self.kind.kernel(x - self.center, self.param)
    }

    /// True when the kernel is non-zero somewhere, i.e. `param > 0`
    pub fn has_support(&self) -> bool {
        self.param > 0.0 && self.param.is_finite()
    }

    /// `[center - half_width, center + half_width]`; empty (lo > hi) when
    /// the pulse has no support
    pub fn extent(&self) -> (f64, f64) {
        let hw = self.kind.half_width(self.param);
        (self.center - hw, self.center + hw)
    }
}

/// Terms recognized in a closed-form formula, in left-to-right order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedForm {
    pub descriptors: Vec<SignalDescriptor>,
    /// One entry per dropped term
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrite a bare `(f)`/`(t)` group (either case) as `(f-0)`/`(t-0)`
fn expand_bare_variable(text: &str) -> String {
    text.replace("(f)", "(f-0)")
        .replace("(F)", "(f-0)")
        .replace("(t)", "(t-0)")
        .replace("(T)", "(t-0)")
}

/// Parse a formula of the form `Σ [±][a*](rect|tri)((f∓c)/w)`.
///
/// Terms that do not fit are dropped with a warning; the rest still parse.
///
/// # Example
/// ```
/// use signal_plot::closed_form::{PulseKind, parse_formula};
///
/// let cf = parse_formula("2*tri((f-3)/4) + sinc(f)");
/// assert_eq!(cf.descriptors.len(), 1);
/// assert_eq!(cf.descriptors[0].kind, PulseKind::Tri);
/// assert_eq!(cf.descriptors[0].center, 3.0);
/// assert_eq!(cf.diagnostics.len(), 1);
/// ```
pub fn parse_formula(text: &str) -> ClosedForm {
    let normalized = normalize(&expand_bare_variable(text));
    let mut out = ClosedForm::default();

    for term in split_top_level(&normalized) {
        match term::parse_term(term) {
            Ok(descriptor) => out.descriptors.push(descriptor),
            Err(diagnostic) => {
                log::warn!("{}", diagnostic);
                out.diagnostics.push(diagnostic);
            }
        }
    }

    log::debug!(
        "closed form '{}': {} pulses, {} rejected terms",
        normalized,
        out.descriptors.len(),
        out.diagnostics.len()
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_variable_expansion() {
        assert_eq!(expand_bare_variable("rect((F)/2)"), "rect((f-0)/2)");
        assert_eq!(expand_bare_variable("tri((t)/1)+(f)"), "tri((t-0)/1)+(f-0)");
        assert_eq!(expand_bare_variable("rect((f-1)/2)"), "rect((f-1)/2)");
    }

    #[test]
    fn test_descriptor_value_and_extent() {
        let d = SignalDescriptor {
            amplitude: -2.0,
            kind: PulseKind::Tri,
            center: 1.0,
            param: 2.0,
        };
        assert_eq!(d.value_at(1.0), -2.0);
        assert_eq!(d.value_at(2.0), -1.0);
        assert_eq!(d.value_at(3.5), 0.0);
        assert_eq!(d.extent(), (-1.0, 3.0));

        let r = SignalDescriptor {
            kind: PulseKind::Rect,
            ..d
        };
        assert_eq!(r.extent(), (0.0, 2.0));
        assert_eq!(r.value_at(2.0), -2.0);
    }

    #[test]
    fn test_negative_width_has_no_support() {
        let d = SignalDescriptor {
            amplitude: 1.0,
            kind: PulseKind::Rect,
            center: 0.0,
            param: -4.0,
        };
        assert!(!d.has_support());
        assert_eq!(d.extent(), (2.0, -2.0));
        assert_eq!(d.value_at(0.0), 0.0);
        assert!(SignalDescriptor { param: 4.0, ..d }.has_support());
    }

    #[test]
    fn test_descriptor_serializes_with_lowercase_kind() {
        let d = SignalDescriptor {
            amplitude: 1.0,
            kind: PulseKind::Rect,
            center: 0.0,
            param: 2.0,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"amplitude":1.0,"kind":"rect","center":0.0,"param":2.0}"#);
    }
}
