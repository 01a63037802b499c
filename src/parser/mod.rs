//! Parser module - converts formula strings to expression trees
mod descent;

use crate::error::Diagnostic;
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, Expr};

/// Result of parsing a formula: always a usable tree, plus what went wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The expression tree; unrecognized fragments are replaced by zero
    pub expr: Expr,
    /// Parse-quality findings in source order
    pub diagnostics: Vec<Diagnostic>,
    /// The whitespace-free, lower-cased text the spans refer to
    pub normalized: String,
}

impl Parsed {
    /// True when every character of the input was understood
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// True when the parse was abandoned and `expr` is only a placeholder
    pub fn is_fatal(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }
}

/// Strip all whitespace and lower-case the formula
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a formula string into an expression tree
///
/// Grammar, on the normalized input:
/// ```text
/// AddSub        := MulDiv (('+'|'-') MulDiv)*
/// MulDiv        := Unary (('*'|'/') Unary)*
/// Unary         := '-' Unary | Primary
/// Primary       := '(' AddSub ')' | Number | FunctionOrVar
/// Number        := [0-9.]+
/// FunctionOrVar := letters ('(' AddSub ')')?
/// ```
/// `f` and `t` name the independent variable and `pi` is the constant. Any
/// other name must be a registered function followed by its argument.
///
/// This never fails. Unknown names, stray characters and malformed numbers
/// evaluate to zero and are reported in [`Parsed::diagnostics`]; a missing
/// `)` and leftover input are tolerated the same way.
///
/// # Example
/// ```
/// use signal_plot::parse;
///
/// let parsed = parse("2 * rect(F - 1)");
/// assert!(parsed.is_clean());
/// assert_eq!(parsed.expr.eval(1.0), 2.0);
/// assert_eq!(parsed.expr.eval(3.0), 0.0);
///
/// let parsed = parse("foo(f) + 1");
/// assert_eq!(parsed.expr.eval(0.0), 1.0);
/// assert_eq!(parsed.diagnostics.len(), 1);
/// ```
pub fn parse(input: &str) -> Parsed {
    parse_with_limits(input, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES)
}

/// [`parse`] with explicit nesting and size limits.
///
/// Groups, calls and negations each count one level of `max_depth`. Every
/// operand, operator, negation and call counts one node of `max_nodes`.
/// Past either limit the parse is abandoned: `expr` is zero and a fatal
/// [`Diagnostic::MaxDepthExceeded`] or [`Diagnostic::MaxNodesExceeded`] is
/// recorded.
pub fn parse_with_limits(input: &str, max_depth: usize, max_nodes: usize) -> Parsed {
    let normalized = normalize(input);
    let (expr, diagnostics) = descent::Parser::new(&normalized, max_depth, max_nodes).run();

    log::debug!(
        "parsed '{}' into {} nodes ({} diagnostics)",
        normalized,
        expr.node_count(),
        diagnostics.len()
    );

    Parsed {
        expr,
        diagnostics,
        normalized,
    }
}
