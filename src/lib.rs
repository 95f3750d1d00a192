/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the command and expression parser.
 *
 * Pipeline:
 * ```text
 * Line → Lexer → Tokens → Parser → Command → (backend)
 *                            ↓
 *                     DiagnosticSink
 * ```
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

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod span;

pub use ast::{BinaryOp, Command, Expr, UnaryOp};
pub use diagnostics::{Diagnostic, DiagnosticPrinter, DiagnosticSink, Diagnostics};
pub use error::{InputError, SyntaxError};
pub use lexer::{Lexer, Token, TokenKind, TokenStream};
pub use parser::{Parser, ParserConfig};
pub use span::Span;

/// Parses one command line, reporting syntax errors to `sink`.
///
/// # Example
/// ```
/// use asmase::{parse_command_line, Diagnostics};
///
/// let mut diags = Diagnostics::new();
/// let cmd = parse_command_line("mem ($sp + 8) 4", &mut diags).unwrap();
/// assert_eq!(cmd.to_string(), "mem [ADD(Variable(sp), Integer(8)), Integer(4)]");
/// assert!(diags.is_empty());
/// ```
pub fn parse_command_line(line: &str, sink: &mut dyn DiagnosticSink) -> Option<Command> {
    Parser::new(Lexer::new(line), sink).parse_command()
}

/// Parses a single expression from the start of `line`.
///
/// Tokens after the expression are ignored.
pub fn parse_expression_line(line: &str, sink: &mut dyn DiagnosticSink) -> Option<Expr> {
    let mut parser = Parser::new(Lexer::new(line), sink);
    parser.prime();
    parser.parse_expression()
}
