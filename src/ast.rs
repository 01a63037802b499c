//! Expression tree for parsed formulas

use std::ops::Deref;
use std::sync::Arc;

use crate::functions::FunctionDefinition;
use crate::visitor::{ExprVisitor, walk_expr};

/// A parsed formula: a pure function of the independent variable.
///
/// Leaves are numbers and the variable; internal nodes are arithmetic
/// operators and built-in function calls. Evaluation is a separate step
/// ([`Expr::eval`]), so a tree can be inspected before it is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

/// Operator joining two operands of a [`ExprKind::Chain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Binding strength: 10 for `+ -`, 20 for `* /`
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Mul | BinaryOp::Div => 20,
        }
    }

    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Constant number (literals and `pi`)
    Number(f64),

    /// The independent variable, spelled `f` or `t`
    Variable(char),

    /// Unary minus
    Neg(Arc<Expr>),

    /// Left-associative run of operators of one precedence level:
    /// `head op1 e1 op2 e2 ...` is `((head op1 e1) op2 e2) ...`.
    ///
    /// `tail` is non-empty. A run of any length is one flat node, so the
    /// tree height of `f+f+...+f` does not grow with the number of terms.
    Chain {
        head: Arc<Expr>,
        tail: Vec<(BinaryOp, Expr)>,
    },

    /// Built-in function applied to one argument
    FunctionCall {
        func: &'static FunctionDefinition,
        arg: Arc<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }

    // Convenience constructors

    /// Create a number expression
    pub fn number(n: f64) -> Self {
        Expr::new(ExprKind::Number(n))
    }

    /// The constant zero every unparseable fragment falls back to
    pub fn zero() -> Self {
        Expr::number(0.0)
    }

    /// Create a variable reference (`f` or `t`)
    pub fn variable(name: char) -> Self {
        Expr::new(ExprKind::Variable(name))
    }

    pub fn neg(operand: Expr) -> Self {
        Expr::new(ExprKind::Neg(Arc::new(operand)))
    }

    /// Join `head` and `tail` into one chain.
    ///
    /// All operators in `tail` must share a precedence level. A `head` that
    /// is itself a chain of that level is extended in place of nesting, which
    /// is valid because chains associate to the left. An empty `tail`
    /// returns `head` unchanged.
    pub fn chain(head: Expr, mut tail: Vec<(BinaryOp, Expr)>) -> Self {
        let Some(level) = tail.first().map(|(op, _)| op.precedence()) else {
            return head;
        };

        match head.kind {
            ExprKind::Chain {
                head: inner,
                tail: mut prefix,
            } if prefix.first().is_some_and(|(op, _)| op.precedence() == level) => {
                prefix.append(&mut tail);
                Expr::new(ExprKind::Chain {
                    head: inner,
                    tail: prefix,
                })
            }
            kind => Expr::new(ExprKind::Chain {
                head: Arc::new(Expr::new(kind)),
                tail,
            }),
        }
    }

    /// Create `left op right`
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::chain(left, vec![(op, right)])
    }

    /// Create an addition expression
    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Add, right)
    }

    /// Create a subtraction expression
    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Sub, right)
    }

    /// Create a multiplication expression
    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Mul, right)
    }

    /// Create a division expression
    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Div, right)
    }

    /// Create a call of a registered function
    pub fn call(func: &'static FunctionDefinition, arg: Expr) -> Self {
        Expr::new(ExprKind::FunctionCall {
            func,
            arg: Arc::new(arg),
        })
    }

    // Accessor methods

    /// Check if expression is a constant number and return its value
    pub fn as_number(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this expression is exactly the zero fallback
    #[inline]
    pub fn is_zero_num(&self) -> bool {
        self.as_number() == Some(0.0)
    }

    /// Count the nodes in the tree, one per operator of a chain
    pub fn node_count(&self) -> usize {
        struct NodeCounter(usize);

        impl ExprVisitor for NodeCounter {
            fn visit_number(&mut self, _n: f64) -> bool {
                self.0 += 1;
                true
            }
            fn visit_variable(&mut self, _name: char) -> bool {
                self.0 += 1;
                true
            }
            fn visit_unary(&mut self, _op: &str, _operand: &Expr) -> bool {
                self.0 += 1;
                true
            }
            fn visit_chain(&mut self, _head: &Expr, tail: &[(BinaryOp, Expr)]) -> bool {
                self.0 += tail.len();
                true
            }
            fn visit_function(&mut self, _func: &FunctionDefinition, _arg: &Expr) -> bool {
                self.0 += 1;
                true
            }
        }

        let mut counter = NodeCounter(0);
        walk_expr(self, &mut counter);
        counter.0
    }

    /// Height of the tree; a single leaf has depth 1
    pub fn depth(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable(_) => 1,
            ExprKind::Neg(inner) | ExprKind::FunctionCall { arg: inner, .. } => 1 + inner.depth(),
            ExprKind::Chain { head, tail } => {
                let deepest = tail.iter().map(|(_, e)| e.depth()).max().unwrap_or(0);
                1 + head.depth().max(deepest)
            }
        }
    }

    /// True when the tree never reads the variable
    pub fn is_constant(&self) -> bool {
        struct VariableFinder(bool);

        impl ExprVisitor for VariableFinder {
            fn visit_number(&mut self, _n: f64) -> bool {
                true
            }
            fn visit_variable(&mut self, _name: char) -> bool {
                self.0 = true;
                false
            }
            fn visit_unary(&mut self, _op: &str, _operand: &Expr) -> bool {
                !self.0
            }
            fn visit_chain(&mut self, _head: &Expr, _tail: &[(BinaryOp, Expr)]) -> bool {
                !self.0
            }
            fn visit_function(&mut self, _func: &FunctionDefinition, _arg: &Expr) -> bool {
                !self.0
            }
        }

        let mut finder = VariableFinder(false);
        walk_expr(self, &mut finder);
        !finder.0
    }

    /// Evaluate the expression at `x`.
    ///
    /// Never fails: division by zero and out-of-domain calls produce
    /// infinities or NaN, which the sampler drops.
    pub fn eval(&self, x: f64) -> f64 {
        match &self.kind {
            ExprKind::Number(n) => *n,
            ExprKind::Variable(_) => x,
            ExprKind::Neg(inner) => -inner.eval(x),
            ExprKind::Chain { head, tail } => tail
                .iter()
                .fold(head.eval(x), |acc, (op, operand)| op.apply(acc, operand.eval(x))),
            ExprKind::FunctionCall { func, arg } => func.call(arg.eval(x)),
        }
    }
}
