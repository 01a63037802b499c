// Display formatting for AST
//
// Output uses the formula grammar itself (no spaces, `pi` for the constant),
// so a displayed tree can be fed back to `parse`.
use crate::{BinaryOp, Expr, ExprKind};
use std::f64::consts::PI;
use std::fmt;

/// Binding strength of the node at the top of `expr`
fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Chain { tail, .. } => tail.first().map_or(30, |(op, _)| op.precedence()),
        ExprKind::Neg(_) => 25,
        ExprKind::Number(n) if *n < 0.0 => 25,
        _ => 30,
    }
}

/// Left operands need parentheses only when they bind looser; right operands
/// also when they bind equally, since both binary levels are left-associative.
fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, min: u8) -> fmt::Result {
    if precedence(operand) < min {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

fn fmt_chain(
    f: &mut fmt::Formatter<'_>,
    level: u8,
    head: &Expr,
    tail: &[(BinaryOp, Expr)],
) -> fmt::Result {
    fmt_operand(f, head, level)?;
    for (op, operand) in tail {
        write!(f, "{}", op.symbol())?;
        fmt_operand(f, operand, level + 1)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => {
                if *n == PI {
                    write!(f, "pi")
                } else if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if n.fract() == 0.0 && n.abs() < 1e10 {
                    // Display as integer if no fractional part
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }

            ExprKind::Variable(name) => write!(f, "{}", name),

            ExprKind::Neg(inner) => {
                write!(f, "-")?;
                // negation is right-recursive, so a nested `-` needs no parens
                fmt_operand(f, inner, 25)
            }

            ExprKind::Chain { head, tail } => fmt_chain(f, precedence(self), head, tail),

            ExprKind::FunctionCall { func, arg } => write!(f, "{}({})", func.name, arg),
        }
    }
}
