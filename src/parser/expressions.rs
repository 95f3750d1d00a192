/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Expression grammar: primaries, prefix operators and
 *           precedence-climbing infix operators.
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 *
 *   expression → unary ( BINOP unary )*        (precedence climbing)
 *   unary      → UNOP unary | primary
 *   primary    → IDENTIFIER | INTEGER | FLOAT | STRING | VARIABLE
 *              | "(" expression ")"
 *
 * Infix operators are not a ladder of one function per level; a single
 * loop compares numeric precedences from `operators.rs`. Prefix operators
 * always bind tighter than any infix operator.
 *
 * ==========================================================================
 */

use std::num::IntErrorKind;

use crate::ast::Expr;
use crate::error::SyntaxError;
use crate::lexer::{TokenKind, TokenStream};
use crate::parser::operators::{binary_op, precedence, token_precedence, unary_op};
use crate::parser::parser::Parser;

impl<S: TokenStream> Parser<'_, S> {
    /// Parses a full expression, infix operators included.
    ///
    /// Expects a primed stream. Trailing tokens that cannot continue the
    /// expression are left under the cursor.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        let start = self.current.start();
        let lhs = self.parse_unary()?;
        self.parse_binary_rhs(0, start, lhs)
    }

    /// primary → IDENTIFIER | INTEGER | FLOAT | STRING | VARIABLE | paren
    pub(crate) fn parse_primary(&mut self) -> Option<Expr> {
        let column = self.current.start();

        match self.current_kind() {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Integer => Some(self.parse_integer()),
            TokenKind::Float => Some(self.parse_float()),
            TokenKind::String => Some(self.parse_string()),
            TokenKind::Variable => Some(self.parse_variable()),
            TokenKind::OpenParen => self.parse_paren(),
            TokenKind::CloseParen => self.error(column, SyntaxError::UnmatchedParentheses),
            TokenKind::Unknown => self.error(column, SyntaxError::InvalidCharacter),
            _ => self.error(column, SyntaxError::ExpectedPrimary),
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        let expr = Expr::Identifier {
            name: self.current.lexeme.clone(),
            span: self.current_span(),
        };
        self.consume_token();
        expr
    }

    fn parse_integer(&mut self) -> Expr {
        let expr = Expr::Integer {
            value: integer_value(&self.current.lexeme),
            span: self.current_span(),
        };
        self.consume_token();
        expr
    }

    fn parse_float(&mut self) -> Expr {
        let expr = Expr::Float {
            value: self.current.lexeme.parse().unwrap_or(0.0),
            span: self.current_span(),
        };
        self.consume_token();
        expr
    }

    fn parse_string(&mut self) -> Expr {
        let expr = Expr::String {
            value: string_value(&self.current.lexeme),
            span: self.current_span(),
        };
        self.consume_token();
        expr
    }

    fn parse_variable(&mut self) -> Expr {
        let lexeme = &self.current.lexeme;
        let expr = Expr::Variable {
            name: lexeme.strip_prefix('$').unwrap_or(lexeme).to_string(),
            span: self.current_span(),
        };
        self.consume_token();
        expr
    }

    /// paren → "(" expression ")"
    ///
    /// Returns the inner expression itself; grouping leaves no node behind.
    /// A missing `)` is reported at the opening parenthesis so the user sees
    /// where the unclosed group started.
    fn parse_paren(&mut self) -> Option<Expr> {
        let open = self.current.start();
        self.consume_token();

        let expr = self.parse_expression()?;

        if self.current_kind() != TokenKind::CloseParen {
            return self.error(open, SyntaxError::UnmatchedParentheses);
        }

        self.consume_token();
        Some(expr)
    }

    /// unary → UNOP unary | primary
    ///
    /// Recursing into `parse_unary` rather than `parse_primary` makes prefix
    /// operators right-associative, so `- - 5` nests two nodes. The operator
    /// token stays consumed if the operand fails.
    pub(crate) fn parse_unary(&mut self) -> Option<Expr> {
        self.nested(|p| {
            let Some(op) = unary_op(p.current_kind()) else {
                return p.parse_primary();
            };

            let op_span = p.current_span();
            p.consume_token();

            let operand = p.parse_unary()?;
            let span = p.span_from(op_span.start);
            Some(Expr::unary(op, op_span, operand, span))
        })
    }

    /// Precedence climbing.
    ///
    /// Absorbs every infix operator binding at least as tightly as `floor`
    /// into `lhs`. An operator below the floor is left under the cursor for
    /// the caller that set the lower floor.
    ///
    /// `start` is the column `lhs` was parsed from, which lies before
    /// `lhs.span()` when `lhs` was parenthesized.
    fn parse_binary_rhs(&mut self, floor: i32, start: usize, mut lhs: Expr) -> Option<Expr> {
        loop {
            let op = binary_op(self.current_kind());
            let op_prec = precedence(op);

            if op_prec < floor {
                return Some(lhs);
            }

            // The floor is never negative, so anything reaching here is an
            // operator.
            let Some(op) = op else {
                return Some(lhs);
            };

            let op_span = self.current_span();
            self.consume_token();

            let rhs_start = self.current.start();
            let mut rhs = self.parse_unary()?;

            // A tighter operator after the operand takes the operand with it.
            if op_prec < token_precedence(self.current_kind()) {
                rhs = self.parse_binary_rhs(op_prec + 1, rhs_start, rhs)?;
            }

            let span = self.span_from(start);
            lhs = Expr::binary(op, op_span, lhs, rhs, span);
        }
    }
}

/// Value of an integer literal.
///
/// Accepts plain decimal and `0x` / `0o` / `0b` prefixed digits. Values too
/// large for an `i64` saturate at `i64::MAX`.
pub(crate) fn integer_value(lexeme: &str) -> i64 {
    let (digits, radix) = match lexeme.get(..2) {
        Some("0x") | Some("0X") => (&lexeme[2..], 16),
        Some("0o") | Some("0O") => (&lexeme[2..], 8),
        Some("0b") | Some("0B") => (&lexeme[2..], 2),
        _ => (lexeme, 10),
    };

    match i64::from_str_radix(digits, radix) {
        Ok(value) => value,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => 0,
    }
}

/// Contents of a string literal with its quotes removed and escapes
/// decoded. Unknown escapes are kept as written.
pub(crate) fn string_value(lexeme: &str) -> String {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('0') => value.push('\0'),
            Some('\\') => value.push('\\'),
            Some('"') => value.push('"'),
            Some('\'') => value.push('\''),
            Some(other) => {
                value.push('\\');
                value.push(other);
            }
            None => value.push('\\'),
        }
    }

    value
}
