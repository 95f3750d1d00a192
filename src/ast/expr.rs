/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * License:
 * This file is part of the ASMASE project.
 *
 * ASMASE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::{BinaryOp, UnaryOp};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// A parsed expression.
///
/// Every variant records the columns of the text it was parsed from.
/// Operator nodes additionally keep the span of the operator token itself,
/// which is where diagnostics about the operation should point.
///
/// Children are boxed and owned by their parent; the tree has no sharing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Identifier { name: String, span: Span },
    Integer { value: i64, span: Span },
    Float { value: f64, span: Span },
    String { value: String, span: Span },
    /// A `$name` session variable. `name` excludes the sigil.
    Variable { name: String, span: Span },
    Unary {
        op: UnaryOp,
        op_span: Span,
        operand: Box<Expr>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        op_span: Span,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    /// Builds a unary node.
    ///
    /// `span` is the source text the node was parsed from. It runs from the
    /// operator through the operand, including any parentheses around the
    /// operand, so it can be wider than `op_span.to(operand.span())`.
    pub fn unary(op: UnaryOp, op_span: Span, operand: Expr, span: Span) -> Expr {
        Expr::Unary {
            op,
            op_span,
            operand: Box::new(operand),
            span,
        }
    }

    /// Builds a binary node covering `span`, which includes any
    /// parentheses around either operand.
    pub fn binary(op: BinaryOp, op_span: Span, left: Expr, right: Expr, span: Span) -> Expr {
        Expr::Binary {
            op,
            op_span,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier { span, .. }
            | Expr::Integer { span, .. }
            | Expr::Float { span, .. }
            | Expr::String { span, .. }
            | Expr::Variable { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Unary { operand, .. } => 1 + operand.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            _ => 1,
        }
    }
}

impl fmt::Display for Expr {
    /// Functional tree notation, e.g. `ADD(Integer(2), Integer(3))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier { name, .. } => write!(f, "Identifier({})", name),
            Expr::Integer { value, .. } => write!(f, "Integer({})", value),
            Expr::Float { value, .. } => write!(f, "Float({:?})", value),
            Expr::String { value, .. } => write!(f, "String({:?})", value),
            Expr::Variable { name, .. } => write!(f, "Variable({})", name),
            Expr::Unary { op, operand, .. } => write!(f, "{}({})", op, operand),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "{}({}, {})", op, left, right),
        }
    }
}
