//! Expression visitor pattern for AST traversal
//!
//! Provides a clean interface for walking the expression tree without
//! manually handling the recursive structure.

use crate::functions::FunctionDefinition;
use crate::{BinaryOp, Expr, ExprKind};

/// Trait for visiting expression nodes in the AST
///
/// Each method returns a boolean indicating whether to continue visiting children.
///
/// # Example
/// ```
/// use signal_plot::visitor::{ExprVisitor, walk_expr};
/// use signal_plot::functions::FunctionDefinition;
/// use signal_plot::{BinaryOp, Expr, parse};
///
/// struct CallCollector(Vec<&'static str>);
///
/// impl ExprVisitor for CallCollector {
///     fn visit_number(&mut self, _n: f64) -> bool { true }
///     fn visit_variable(&mut self, _name: char) -> bool { true }
///     fn visit_unary(&mut self, _op: &str, _operand: &Expr) -> bool { true }
///     fn visit_chain(&mut self, _head: &Expr, _tail: &[(BinaryOp, Expr)]) -> bool { true }
///     fn visit_function(&mut self, func: &FunctionDefinition, _arg: &Expr) -> bool {
///         self.0.push(func.name);
///         true
///     }
/// }
///
/// let parsed = parse("rect(f) + 2*sinc(f-1)");
/// let mut calls = CallCollector(Vec::new());
/// walk_expr(&parsed.expr, &mut calls);
/// assert_eq!(calls.0, ["rect", "sinc"]);
/// ```
pub trait ExprVisitor {
    /// Visit a number literal, returns true to continue visiting
    fn visit_number(&mut self, n: f64) -> bool;

    /// Visit the independent variable, returns true to continue visiting
    fn visit_variable(&mut self, name: char) -> bool;

    /// Visit a unary operation (only `-`), returns true to visit the operand
    fn visit_unary(&mut self, op: &str, operand: &Expr) -> bool;

    /// Visit a run of `+ -` or `* /` operators, returns true to visit the
    /// head and then every tail operand in order
    fn visit_chain(&mut self, head: &Expr, tail: &[(BinaryOp, Expr)]) -> bool;

    /// Visit a function call, returns true to visit the argument
    fn visit_function(&mut self, func: &FunctionDefinition, arg: &Expr) -> bool;
}

/// Walk an expression tree with a visitor
///
/// Visits nodes in pre-order (parent before children).
/// The visitor methods return true to continue walking children, false to skip.
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    match &expr.kind {
        ExprKind::Number(n) => {
            visitor.visit_number(*n);
        }
        ExprKind::Variable(name) => {
            visitor.visit_variable(*name);
        }
        ExprKind::Neg(inner) => {
            if visitor.visit_unary("-", inner) {
                walk_expr(inner, visitor);
            }
        }
        ExprKind::Chain { head, tail } => {
            if visitor.visit_chain(head, tail) {
                walk_expr(head, visitor);
                for (_, operand) in tail {
                    walk_expr(operand, visitor);
                }
            }
        }
        ExprKind::FunctionCall { func, arg } => {
            if visitor.visit_function(func, arg) {
                walk_expr(arg, visitor);
            }
        }
    }
}
