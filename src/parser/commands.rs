/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     parser/commands.rs
 * Purpose:  Top-level command parsing and argument error recovery.
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

use crate::ast::Command;
use crate::error::SyntaxError;
use crate::lexer::{TokenKind, TokenStream};
use crate::parser::parser::Parser;

impl<S: TokenStream> Parser<'_, S> {
    /// Parses one whole command line.
    ///
    /// command → IDENTIFIER unary*
    ///
    /// Arguments are unary expressions, so `regs 1 + 2` has the two
    /// arguments `1` and `+2`; a binary argument must be parenthesized.
    ///
    /// # Recovery
    /// A failed argument has already been reported. The token the failure
    /// stopped on is discarded and parsing resumes, so one bad argument
    /// does not cost the rest. Failed arguments are left out of the list.
    ///
    /// Returns `None` only when the line does not start with a command name.
    pub fn parse_command(&mut self) -> Option<Command> {
        self.prime();

        if self.current_kind() != TokenKind::Identifier {
            let column = self.current.start();
            return self.error(column, SyntaxError::ExpectedCommand);
        }

        let name = self.current.lexeme.clone();
        let span = self.current_span();
        self.consume_token();

        let mut args = Vec::new();

        while !self.is_at_end() {
            match self.parse_unary() {
                Some(arg) => args.push(arg),
                None => {
                    tracing::trace!(skipped = %self.current, "recovering after failed argument");
                    self.consume_token();
                }
            }
        }

        tracing::debug!(command = %name, args = args.len(), "parsed command");
        Some(Command::new(name, span, args))
    }
}
