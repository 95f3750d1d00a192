/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     lexer/token.rs
 * Purpose:  Token kinds and the token value handed to the parser.
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

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** on a command line.
///
/// Punctuation gets one kind per operator so the parser's operator tables
/// can dispatch on the kind alone, never on the lexeme.
///
/// # Pipeline Role
/// ```text
/// Line → Lexer → TokenKind → Parser → Command
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A bare name: command keywords, registers, assembler directives.
    Identifier,

    /// A decimal or radix-prefixed integer literal: `42`, `0x7fff`.
    Integer,

    /// A floating-point literal: `3.14`, `1e9`.
    Float,

    /// A double-quoted string literal. The lexeme keeps its quotes and
    /// escapes; decoding happens in the parser.
    String,

    /// A session variable reference: `$name`.
    Variable,

    OpenParen,
    CloseParen,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Exclamation,
    Tilde,
    DoubleEqual,
    ExclamationEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    DoubleAmpersand,
    DoublePipe,
    Ampersand,
    Pipe,
    Caret,
    DoubleLess,
    DoubleGreater,

    /// Anything the lexer could not classify.
    ///
    /// Includes stray characters, a lone `=`, a `$` with no name and
    /// unterminated strings.
    Unknown,

    /// End of the input line.
    ///
    /// The lexer keeps returning this once the line is exhausted, so a
    /// parser may safely consume past the end.
    Eof,
}

/// A single classified token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Inclusive column range of the lexeme.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// An `Eof` token positioned at `column`.
    pub fn eof(column: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::point(column))
    }

    /// First column of the token.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Last column of the token (inclusive).
    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token {
    /// Formats a token for user-facing output: only the lexeme, since that
    /// is what the user typed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}
