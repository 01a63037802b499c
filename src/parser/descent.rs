use crate::error::{Diagnostic, Span};
use crate::functions::Registry;
use crate::{BinaryOp, Expr, ExprKind};
use std::f64::consts::PI;

/// Recursive-descent parser over a normalized formula.
///
/// No production ever fails: anything unrecognized becomes `Expr::zero()`
/// and leaves a diagnostic behind. The only hard stops are the nesting and
/// node limits, after which every production returns zero without
/// consuming input.
pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
    nodes: usize,
    max_nodes: usize,
    aborted: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, max_depth: usize, max_nodes: usize) -> Self {
        Parser {
            input,
            pos: 0,
            depth: 0,
            max_depth,
            nodes: 0,
            max_nodes,
            aborted: false,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole input, returning the tree and everything noticed on the way
    pub(crate) fn run(mut self) -> (Expr, Vec<Diagnostic>) {
        let expr = self.parse_add_sub();

        if self.aborted {
            return (Expr::zero(), self.diagnostics);
        }

        if self.pos < self.input.len() {
            self.diagnostics.push(Diagnostic::TrailingInput {
                rest: self.input[self.pos..].to_string(),
                span: Span::new(self.pos, self.input.len()),
            });
        }

        (expr, self.diagnostics)
    }

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume bytes while `pred` holds and return them
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while self.current().is_some_and(&pred) {
            self.advance();
        }
        &input[start..self.pos]
    }

    /// Step one nesting level down; false once the limit is hit
    fn enter(&mut self) -> bool {
        if self.aborted {
            return false;
        }
        self.depth += 1;
        if self.depth > self.max_depth {
            self.aborted = true;
            self.diagnostics.push(Diagnostic::MaxDepthExceeded {
                limit: self.max_depth,
            });
            return false;
        }
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Charge one node against the budget; false once it is spent
    fn count_node(&mut self) -> bool {
        if self.aborted {
            return false;
        }
        self.nodes += 1;
        if self.nodes > self.max_nodes {
            self.aborted = true;
            self.diagnostics.push(Diagnostic::MaxNodesExceeded {
                limit: self.max_nodes,
            });
            return false;
        }
        true
    }

    /// A `)` is optional: a missing one is noted, never required
    fn skip_close_paren(&mut self) {
        if self.current() == Some(b')') {
            self.advance();
        } else if !self.aborted {
            self.diagnostics.push(Diagnostic::UnclosedParen {
                span: Span::at(self.pos),
            });
        }
    }

    // AddSub := MulDiv (('+'|'-') MulDiv)*
    fn parse_add_sub(&mut self) -> Expr {
        let head = self.parse_mul_div();
        let mut tail = Vec::new();

        while let Some(op @ (b'+' | b'-')) = self.current() {
            if !self.count_node() {
                break;
            }
            self.advance();
            let op = if op == b'+' { BinaryOp::Add } else { BinaryOp::Sub };
            tail.push((op, self.parse_mul_div()));
        }

        Expr::chain(head, tail)
    }

    // MulDiv := Unary (('*'|'/') Unary)*
    fn parse_mul_div(&mut self) -> Expr {
        let head = self.parse_unary();
        let mut tail = Vec::new();

        while let Some(op @ (b'*' | b'/')) = self.current() {
            if !self.count_node() {
                break;
            }
            self.advance();
            let op = if op == b'*' { BinaryOp::Mul } else { BinaryOp::Div };
            tail.push((op, self.parse_unary()));
        }

        Expr::chain(head, tail)
    }

    // Unary := '-' Unary | Primary
    fn parse_unary(&mut self) -> Expr {
        if self.current() == Some(b'-') {
            if !self.count_node() || !self.enter() {
                return Expr::zero();
            }
            self.advance();
            let operand = self.parse_unary();
            self.leave();
            return Expr::neg(operand);
        }

        self.parse_primary()
    }

    // Primary := '(' AddSub ')' | Number | FunctionOrVar
    fn parse_primary(&mut self) -> Expr {
        if !self.count_node() {
            return Expr::zero();
        }

        match self.current() {
            Some(b'(') => {
                if !self.enter() {
                    return Expr::zero();
                }
                self.advance(); // consume (
                let expr = self.parse_add_sub();
                self.skip_close_paren();
                self.leave();
                expr
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.parse_number(),
            Some(c) if c.is_ascii_lowercase() => self.parse_function_or_var(),
            Some(_) => {
                // Not consumed: the enclosing loops stop here and the rest
                // is reported as trailing input
                let got = self.input[self.pos..]
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                let span = Span::new(self.pos, self.pos + got.len());
                self.diagnostics
                    .push(Diagnostic::UnexpectedToken { got, span });
                Expr::zero()
            }
            None => {
                self.diagnostics.push(Diagnostic::UnexpectedToken {
                    got: "end of input".to_string(),
                    span: Span::at(self.pos),
                });
                Expr::zero()
            }
        }
    }

    // Number := [0-9.]+
    //
    // The value is the longest `digits[.digits]` prefix of the run, so
    // `1.2.3` reads as 1.2. A run without any digit in that prefix is NaN,
    // which blanks every sample it reaches.
    fn parse_number(&mut self) -> Expr {
        let start = self.pos;
        let run = self.take_while(|c| c.is_ascii_digit() || c == b'.');
        let span = Span::new(start, self.pos);

        let bytes = run.as_bytes();
        let int_len = bytes.iter().take_while(|c| c.is_ascii_digit()).count();
        let mut prefix_len = int_len;
        if bytes.get(int_len) == Some(&b'.') {
            let frac_len = bytes[int_len + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            prefix_len = int_len + 1 + frac_len;
        }
        let prefix = &run[..prefix_len];

        let has_digit = prefix.bytes().any(|c| c.is_ascii_digit());
        let value = if has_digit { prefix.parse::<f64>().ok() } else { None };

        match value {
            Some(n) => {
                if prefix_len < run.len() {
                    self.diagnostics.push(Diagnostic::InvalidNumber {
                        value: run.to_string(),
                        span,
                    });
                }
                Expr::number(n)
            }
            None => {
                self.diagnostics.push(Diagnostic::InvalidNumber {
                    value: run.to_string(),
                    span,
                });
                Expr::number(f64::NAN)
            }
        }
    }

    // FunctionOrVar := letters ('(' AddSub ')')?
    fn parse_function_or_var(&mut self) -> Expr {
        let start = self.pos;
        let name = self.take_while(|c| c.is_ascii_lowercase());
        let name_span = Span::new(start, self.pos);

        match name {
            "f" | "t" => return Expr::variable(name.as_bytes()[0] as char),
            "pi" => return Expr::number(PI),
            _ => {}
        }

        if self.current() != Some(b'(') {
            let diagnostic = if Registry::contains(name) {
                Diagnostic::MissingArgument {
                    name: name.to_string(),
                    span: name_span,
                }
            } else {
                Diagnostic::UnknownIdentifier {
                    name: name.to_string(),
                    span: name_span,
                }
            };
            self.diagnostics.push(diagnostic);
            return Expr::zero();
        }

        if !self.enter() {
            return Expr::zero();
        }
        self.advance(); // consume (
        let arg = self.parse_add_sub();
        self.skip_close_paren();
        self.leave();

        match Registry::get(name) {
            Some(func) => Expr::new(ExprKind::FunctionCall {
                func,
                arg: arg.into(),
            }),
            None => {
                self.diagnostics.push(Diagnostic::UnknownIdentifier {
                    name: name.to_string(),
                    span: name_span,
                });
                Expr::zero()
            }
        }
    }
}
