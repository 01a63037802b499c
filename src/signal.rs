//! Anything the sampler can walk over a grid

use crate::closed_form::{ClosedForm, SignalDescriptor};
use crate::parser::Parsed;
use crate::Expr;

/// A real signal of one real variable
pub trait Signal {
    /// Value at `x`; may be non-finite, callers decide what to do with that
    fn value_at(&self, x: f64) -> f64;
}

impl Signal for Expr {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        self.eval(x)
    }
}

impl Signal for Parsed {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }
}

impl Signal for SignalDescriptor {
    #[inline]
    fn value_at(&self, x: f64) -> f64 {
        SignalDescriptor::value_at(self, x)
    }
}

// Sum of pulses; an empty list is the zero signal
impl Signal for [SignalDescriptor] {
    fn value_at(&self, x: f64) -> f64 {
        self.iter().map(|d| d.value_at(x)).sum()
    }
}

impl Signal for ClosedForm {
    fn value_at(&self, x: f64) -> f64 {
        self.descriptors.as_slice().value_at(x)
    }
}
