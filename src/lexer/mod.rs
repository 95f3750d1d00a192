/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for tokenization.
 *
 * This module wires together:
 *   - Token definitions
 *   - The single-line lexer
 *   - The `TokenStream` cursor interface the parser consumes
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

/// Token kinds and the `Token` value type.
pub mod token;

/// The on-demand, single-line lexer.
#[allow(clippy::module_inception)]
pub mod lexer;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// A forward-only cursor over tokens.
///
/// The parser pulls one token at a time. Once the input is exhausted an
/// implementation must keep returning `TokenKind::Eof`, so that an error
/// recovery skip at the end of the line is harmless.
pub trait TokenStream {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Adapts any token iterator (for example a pre-scanned `Vec<Token>`) into
/// a [`TokenStream`].
///
/// When the iterator runs dry the adapter synthesizes `Eof` tokens placed
/// one column past the last token it saw.
pub struct TokenIter<I> {
    inner: I,
    eof_column: usize,
}

impl<I: Iterator<Item = Token>> TokenIter<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: tokens.into_iter(),
            eof_column: 0,
        }
    }
}

impl<I: Iterator<Item = Token>> TokenStream for TokenIter<I> {
    fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(token) => {
                self.eof_column = match token.kind {
                    TokenKind::Eof => token.start(),
                    _ => token.end() + 1,
                };
                token
            }
            None => Token::eof(self.eof_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn token_iter_synthesizes_eof_after_last_token() {
        let tokens = vec![Token::new(TokenKind::Integer, "12", Span::new(3, 4))];
        let mut stream = TokenIter::new(tokens);

        assert_eq!(stream.next_token().kind, TokenKind::Integer);
        let eof = stream.next_token();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span, Span::point(5));
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
    }
}
