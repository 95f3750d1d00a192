/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * Core Recursive-Descent Parser
 *
 * This file defines the `Parser` structure: the token cursor, the
 * diagnostic sink errors are reported to, and the nesting budget.
 *
 * The grammar itself is split across sibling modules:
 * - `expressions.rs` → primary, unary, parenthesized and binary parsing
 * - `commands.rs`    → the top-level command line and its error recovery
 * - `helpers.rs`     → cursor movement and error reporting
 *
 * --------------------------------------------------------------------------
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

use crate::diagnostics::DiagnosticSink;
use crate::lexer::{Token, TokenStream};
use crate::parser::ParserConfig;

/// The command-line parser.
///
/// A parser owns its token cursor and borrows the sink it reports errors
/// to. It is meant to be used for one command (or one bare expression) and
/// then dropped; nothing is shared between parses.
///
/// Every parse method returns `None` after reporting a failure. Callers
/// propagate the absence with `?`; only the command loop recovers from it.
///
/// The grammar logic lives in extension modules (`expressions`,
/// `commands`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'d, S: TokenStream> {
    /// Source of tokens.
    ///
    /// Pulled one token at a time; the parser never looks further ahead
    /// than the token under the cursor.
    pub(crate) stream: S,

    /// The token under the cursor.
    ///
    /// Before the stream is primed this is an `Eof` placeholder.
    pub(crate) current: Token,

    /// End column of the most recently consumed token.
    ///
    /// Operator nodes take the end of their span from here, so a closing
    /// parenthesis around an operand is covered by the node.
    pub(crate) previous_end: usize,

    /// Where syntax errors go.
    ///
    /// Each failure is reported here exactly once, by the parse function
    /// that detected it.
    pub(crate) sink: &'d mut dyn DiagnosticSink,

    /// Limits applied to this parse.
    pub(crate) config: ParserConfig,

    /// How many unary levels are currently being parsed.
    pub(crate) depth: usize,
}

impl<'d, S: TokenStream> Parser<'d, S> {
    /// Creates a parser with the default configuration.
    ///
    /// The stream is not primed: [`Parser::parse_command`] does that itself,
    /// while a bare [`Parser::parse_expression`] needs [`Parser::prime`]
    /// first.
    ///
    /// # Parameters
    /// - `stream`: Any token source, usually a [`crate::Lexer`]
    /// - `sink`: Receives one `(message, column)` pair per syntax error
    ///
    /// # Example
    /// ```rust
    /// use asmase::{Diagnostics, Lexer, Parser};
    ///
    /// let mut diags = Diagnostics::new();
    /// let cmd = Parser::new(Lexer::new("regs"), &mut diags).parse_command();
    /// assert_eq!(cmd.unwrap().name, "regs");
    /// ```
    pub fn new(stream: S, sink: &'d mut dyn DiagnosticSink) -> Self {
        Self::with_config(stream, sink, ParserConfig::default())
    }

    /// Creates a parser with explicit limits.
    ///
    /// # Parameters
    /// - `stream`: Any token source, usually a [`crate::Lexer`]
    /// - `sink`: Receives one `(message, column)` pair per syntax error
    /// - `config`: Limits for this parse, such as the nesting depth
    ///
    /// # Example
    /// ```rust
    /// use asmase::{Diagnostics, Lexer, Parser, ParserConfig};
    ///
    /// let mut diags = Diagnostics::new();
    /// let config = ParserConfig { max_depth: 2 };
    /// let cmd = Parser::with_config(Lexer::new("p ((1))"), &mut diags, config)
    ///     .parse_command();
    ///
    /// assert!(cmd.unwrap().args.is_empty());
    /// assert_eq!(diags.len(), 3);
    /// ```
    pub fn with_config(stream: S, sink: &'d mut dyn DiagnosticSink, config: ParserConfig) -> Self {
        Self {
            stream,
            current: Token::eof(0),
            previous_end: 0,
            sink,
            config,
            depth: 0,
        }
    }

    /// Loads the first token under the cursor.
    ///
    /// Calling it again skips a token, so it belongs before the first parse
    /// call only.
    pub fn prime(&mut self) {
        self.consume_token();
    }

    /// The token currently under the cursor.
    ///
    /// After a parse this is the first token that was not consumed, which
    /// is how callers find out where an expression stopped.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The limits this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}
