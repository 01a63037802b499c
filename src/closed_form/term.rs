//! Matcher for a single closed-form term
//!
//! ```text
//! term      := sign? (amplitude '*')? kind '(' '(' var offset? ')' '/' divisor ')'
//! kind      := 'rect' | 'tri'
//! var       := 'f' | 't'
//! offset    := ('+' | '-') number
//! amplitude := number
//! divisor   := number
//! number    := digits ('.' digits?)? | '.' digits
//! ```
//! A bare `rect`/`tri` carries the implicit amplitude 1 with the term's sign.

use super::{PulseKind, SignalDescriptor};
use crate::error::Diagnostic;

pub(crate) struct TermScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TermScanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        TermScanner { input, pos: 0 }
    }

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.current() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.input[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn skip_digits(&mut self) -> usize {
        let from = self.pos;
        while self.current().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - from
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// `+` → 1, `-` → -1, nothing → 1
    fn sign(&mut self) -> f64 {
        if self.eat(b'-') {
            -1.0
        } else {
            self.eat(b'+');
            1.0
        }
    }

    /// Unsigned decimal literal
    pub(crate) fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        let int_digits = self.skip_digits();
        let mut frac_digits = 0;
        if self.eat(b'.') {
            frac_digits = self.skip_digits();
        }
        if int_digits + frac_digits == 0 {
            self.pos = start;
            return None;
        }
        self.input[start..self.pos].parse().ok()
    }

    /// Signed amplitude up to and including `*`; the implicit ±1 when the
    /// pulse name follows the sign directly
    pub(crate) fn amplitude(&mut self) -> Option<f64> {
        let sign = self.sign();
        match self.number() {
            Some(n) if self.eat(b'*') => Some(sign * n),
            Some(_) => None,
            None => Some(sign),
        }
    }

    pub(crate) fn kind(&mut self) -> Option<PulseKind> {
        if self.eat_str("rect") {
            Some(PulseKind::Rect)
        } else if self.eat_str("tri") {
            Some(PulseKind::Tri)
        } else {
            None
        }
    }

    /// `(f-c)` / `(t+c)` / `(f)`; returns the pulse center, i.e. the negated offset
    pub(crate) fn shifted_variable(&mut self) -> Option<f64> {
        if !self.eat(b'(') {
            return None;
        }
        if !(self.eat(b'f') || self.eat(b't')) {
            return None;
        }
        let offset = match self.current() {
            Some(b'+') | Some(b'-') => {
                let sign = self.sign();
                sign * self.number()?
            }
            _ => 0.0,
        };
        if !self.eat(b')') {
            return None;
        }
        // -(-0.0) keeps the center at +0.0 for `(f-0)`
        Some(0.0 - offset)
    }

    /// `/w`, the pulse parameter
    pub(crate) fn divisor(&mut self) -> Option<f64> {
        if !self.eat(b'/') {
            return None;
        }
        self.number()
    }

    fn descriptor(&mut self) -> Option<SignalDescriptor> {
        let amplitude = self.amplitude()?;
        let kind = self.kind()?;
        if !self.eat(b'(') {
            return None;
        }
        let center = self.shifted_variable()?;
        let param = self.divisor()?;
        if !self.eat(b')') || !self.at_end() {
            return None;
        }
        Some(SignalDescriptor {
            amplitude,
            kind,
            center,
            param,
        })
    }
}

/// Match one normalized term against the closed form
pub(crate) fn parse_term(term: &str) -> Result<SignalDescriptor, Diagnostic> {
    let descriptor = TermScanner::new(term)
        .descriptor()
        .ok_or_else(|| Diagnostic::UnrecognizedTerm {
            term: term.to_string(),
        })?;

    if !descriptor.has_support() {
        return Err(Diagnostic::DegeneratePulse {
            term: term.to_string(),
        });
    }

    Ok(descriptor)
}
