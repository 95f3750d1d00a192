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

use crate::error::SyntaxError;
use crate::lexer::{TokenKind, TokenStream};
use crate::parser::parser::Parser;
use crate::span::Span;

impl<S: TokenStream> Parser<'_, S> {
    /// Advances one token forward.
    ///
    /// The token being left behind becomes the "previous" token: its end
    /// column is kept in `previous_end` for span construction.
    ///
    /// Safe to call at end of input: the stream keeps yielding `Eof`.
    pub(crate) fn consume_token(&mut self) {
        self.previous_end = self.current.end();
        self.current = self.stream.next_token();
        tracing::trace!(kind = ?self.current.kind, span = %self.current.span, "token");
    }

    /// Kind of the token under the cursor.
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Source columns of the token under the cursor.
    pub(crate) fn current_span(&self) -> Span {
        self.current.span
    }

    /// Span from `start` through the end of the last consumed token.
    ///
    /// Operator nodes use this instead of joining their children's spans,
    /// since the children of `-(1 + 2)` do not cover the parentheses.
    ///
    /// # Parameters
    /// - `start`: Column of the first token the node was parsed from
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous_end.max(start))
    }

    /// Returns true if the cursor sits on `Eof`.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Reports `error` at `column` and yields the absent result every parse
    /// method returns on failure.
    ///
    /// # Parameters
    /// - `column`: 0-based source column the diagnostic points at
    /// - `error`: What went wrong; its `Display` text is the message
    ///
    /// # Returns
    /// Always `None`, so call sites can `return self.error(..)` directly.
    pub(crate) fn error<T>(&mut self, column: usize, error: SyntaxError) -> Option<T> {
        tracing::debug!(column, %error, "syntax error");
        self.sink.report(&error.to_string(), column);
        None
    }

    /// Runs `parse` one nesting level deeper, failing once the configured
    /// depth budget is spent.
    ///
    /// Only unary-level parses go through here: each prefix operator, each
    /// parenthesized group and the innermost operand. Binary climbing nests
    /// at most once per precedence level and is not counted.
    ///
    /// On failure the error is reported at the token under the cursor and
    /// nothing is consumed.
    pub(crate) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.config.max_depth {
            let column = self.current.start();
            let limit = self.config.max_depth;
            return self.error(column, SyntaxError::NestingTooDeep { limit });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
