//! Core expression tree → LaTeX math rendering.
//!
//! This module provides pure rendering logic that transforms an expression
//! tree into LaTeX math-mode text. No I/O is performed here - the report
//! layer handles writing to files/writers.
//!
//! Bracket insertion is structural: whether a sub-expression is
//! parenthesized depends on the kind and child count of that sub-expression
//! in its embedding context, never on a numeric precedence table. The rules
//! are asymmetric in places (see the product rule below); the asymmetries
//! are part of the output contract and downstream documents depend on them.

use crate::ast::{BinaryKind, Expr, NaryKind, RelationKind, UnaryKind};
use crate::model::{RenderConfig, SymbolEnvironment};

use super::number::format_number;
use super::symbols::{constant_symbol, function_symbol, render_identifier, styled_id};

/// Placeholder emitted for malformed input instead of aborting the render.
const UNDEFINED: &str = "\\mathrm{undefined}";

/// Render an expression tree to LaTeX math-mode text.
///
/// Total over well-formed trees and pure: the output depends only on the
/// tree, the environment, and the configuration. Malformed nodes degrade to
/// a visible `undefined` placeholder so one broken formula cannot take down
/// a whole report.
pub fn render_math(expr: &Expr, env: &SymbolEnvironment, config: &RenderConfig) -> String {
    let mut ctx = MathContext {
        env,
        config,
        output: String::new(),
    };
    ctx.walk(expr);
    ctx.output
}

/// Rendering context: the read-only environment plus the output buffer
/// (pure string accumulation, no I/O).
struct MathContext<'a> {
    env: &'a SymbolEnvironment,
    config: &'a RenderConfig,
    output: String,
}

impl MathContext<'_> {
    fn walk(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(value) => self.output.push_str(&format_number(*value)),
            Expr::Integer(value) => self.output.push_str(&format_number(*value as f64)),

            Expr::Rational(numerator, denominator) => {
                self.output.push_str(&format!(
                    "\\frac{{{}}}{{{}}}",
                    format_number(*numerator),
                    format_number(*denominator)
                ));
            }

            Expr::Ident(name) => {
                self.output
                    .push_str(&render_identifier(name, self.env, self.config));
            }

            Expr::Constant(constant) => self.output.push_str(constant_symbol(*constant)),

            Expr::Unary(kind, operand) => self.walk_unary(*kind, operand),

            Expr::Binary(BinaryKind::Power, base, exponent) => {
                // Bracket a compound base; the exponent is delimited by its
                // braces and never bracketed.
                self.walk_operand(base, base.is_compound());
                self.output.push_str("^{");
                self.walk(exponent);
                self.output.push('}');
            }

            Expr::Binary(BinaryKind::Divide, numerator, denominator) => {
                // The fraction bar disambiguates; neither side is ever
                // parenthesized.
                self.output.push_str("\\frac{");
                self.walk(numerator);
                self.output.push_str("}{");
                self.walk(denominator);
                self.output.push('}');
            }

            Expr::Nary(kind, operands) => self.walk_nary(*kind, operands),

            Expr::Relation(kind, left, right) => {
                self.walk(left);
                self.output.push_str(relation_connective(*kind));
                self.walk(right);
            }

            Expr::Call(name, args) => {
                if args.is_empty() {
                    self.placeholder();
                    return;
                }
                self.output.push_str(&styled_id(name, self.config));
                self.output.push_str("\\left(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.walk(arg);
                }
                self.output.push_str("\\right)");
            }

            Expr::Root { index, radicand } => {
                if is_literal_two(index) {
                    self.output.push_str("\\sqrt{");
                    self.walk(radicand);
                    self.output.push('}');
                } else {
                    self.output.push_str("\\sqrt[");
                    self.walk(index);
                    self.output.push_str("]{");
                    self.walk(radicand);
                    self.output.push('}');
                }
            }

            Expr::Lambda { params, body } => {
                self.output.push_str("\\left(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.output
                        .push_str(&render_identifier(param, self.env, self.config));
                }
                self.output.push_str("\\right) = ");
                self.walk(body);
            }

            Expr::Piecewise { pieces, otherwise } => {
                if pieces.is_empty() && otherwise.is_none() {
                    self.placeholder();
                    return;
                }
                self.output.push_str("\\begin{cases}");
                let mut first = true;
                for (value, condition) in pieces {
                    if !first {
                        self.output.push_str("\\\\");
                    }
                    first = false;
                    self.walk(value);
                    self.output.push_str(" & \\text{if } ");
                    self.walk(condition);
                }
                if let Some(fallback) = otherwise {
                    if !first {
                        self.output.push_str("\\\\");
                    }
                    self.walk(fallback);
                    self.output.push_str(" & \\text{otherwise}");
                }
                self.output.push_str("\\end{cases}");
            }
        }
    }

    fn walk_unary(&mut self, kind: UnaryKind, operand: &Expr) {
        match kind {
            UnaryKind::Negate => {
                self.output.push('-');
                self.walk_operand(operand, operand.is_compound());
            }
            UnaryKind::Sqrt => {
                self.output.push_str("\\sqrt{");
                self.walk(operand);
                self.output.push('}');
            }
            UnaryKind::Abs => {
                self.output.push_str("\\left|");
                self.walk(operand);
                self.output.push_str("\\right|");
            }
            UnaryKind::Ceiling => {
                self.output.push_str("\\left\\lceil ");
                self.walk(operand);
                self.output.push_str("\\right\\rceil");
            }
            UnaryKind::Floor => {
                self.output.push_str("\\left\\lfloor ");
                self.walk(operand);
                self.output.push_str("\\right\\rfloor");
            }
            UnaryKind::Factorial => {
                self.walk_operand(operand, operand.is_compound());
                self.output.push('!');
            }
            UnaryKind::Not => {
                self.output.push_str("\\neg ");
                self.walk_operand(operand, operand.is_compound());
            }
            kind => {
                let Some(symbol) = function_symbol(kind) else {
                    self.placeholder();
                    return;
                };
                self.output.push_str(symbol);
                if kind.is_inverse() {
                    // Inverse functions only bracket a compound argument.
                    if operand.is_compound() {
                        self.walk_bracketed(operand);
                    } else {
                        self.output.push(' ');
                        self.walk(operand);
                    }
                } else {
                    // Non-inverse functions carry their own delimiter pair.
                    self.walk_bracketed(operand);
                }
            }
        }
    }

    fn walk_nary(&mut self, kind: NaryKind, operands: &[Expr]) {
        // Single-operand sums do occur in source documents and render as
        // the bare operand; an operator with no operands at all is
        // malformed and degrades to the placeholder.
        if operands.is_empty() {
            self.placeholder();
            return;
        }

        match kind {
            NaryKind::Plus => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(" + ");
                    }
                    let bracket = i > 0 && matches!(operand, Expr::Nary(NaryKind::Minus, _));
                    self.walk_operand(operand, bracket);
                }
            }
            NaryKind::Minus => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(" - ");
                    }
                    let bracket = i > 0 && matches!(operand, Expr::Nary(NaryKind::Plus, _));
                    self.walk_operand(operand, bracket);
                }
            }
            NaryKind::Times => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str("\\cdot ");
                    }
                    // The leading factor is only bracketed when it is a sum
                    // of more than one term; every later sum factor is
                    // bracketed regardless of arity. Asymmetric on purpose.
                    let bracket = if i == 0 {
                        operand.is_sum() && operand.child_count() > 1
                    } else {
                        operand.is_sum()
                    };
                    self.walk_operand(operand, bracket);
                }
            }
            NaryKind::And | NaryKind::Or | NaryKind::Xor => {
                let connective = match kind {
                    NaryKind::And => "\\wedge ",
                    NaryKind::Or => "\\lor ",
                    _ => "\\oplus ",
                };
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(connective);
                    }
                    self.walk_operand(operand, operand.child_count() > 1);
                }
            }
        }
    }

    fn walk_operand(&mut self, operand: &Expr, bracket: bool) {
        if bracket {
            self.walk_bracketed(operand);
        } else {
            self.walk(operand);
        }
    }

    fn walk_bracketed(&mut self, operand: &Expr) {
        self.output.push_str("\\left(");
        self.walk(operand);
        self.output.push_str("\\right)");
    }

    fn placeholder(&mut self) {
        self.output.push_str(UNDEFINED);
    }
}

fn relation_connective(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::Eq => " = ",
        RelationKind::Neq => " \\neq ",
        RelationKind::Lt => " < ",
        RelationKind::Leq => " \\leq ",
        RelationKind::Gt => " > ",
        RelationKind::Geq => " \\geq ",
    }
}

/// Whether a root index is the literal 2, in which case the indexed radical
/// degrades to a plain square root.
fn is_literal_two(index: &Expr) -> bool {
    match index {
        Expr::Integer(2) => true,
        Expr::Number(value) => *value == 2.0,
        _ => false,
    }
}
