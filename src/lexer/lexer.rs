/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Single-line tokenizer feeding the command parser.
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

use crate::lexer::token::{Token, TokenKind};
use crate::lexer::TokenStream;
use crate::span::Span;

/// Tokenizer for one line of REPL input.
///
/// Tokens are produced on demand through [`TokenStream::next_token`]; the
/// lexer never fails, it classifies anything it does not understand as
/// `TokenKind::Unknown` and lets the parser report it.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
}

impl Lexer {
    /// Creates a lexer over a single line of source.
    ///
    /// Columns are character offsets into `source`, so multi-byte input
    /// still lines up with the caret the diagnostic printer draws.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
        }
    }

    /// Scans the whole line, including the terminating `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Scans and returns a single token starting at the cursor.
    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof(self.chars.len());
        }

        let start = self.current;
        let ch = self.advance();

        let kind = match ch {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '~' => TokenKind::Tilde,
            '^' => TokenKind::Caret,

            '!' => self.either('=', TokenKind::ExclamationEqual, TokenKind::Exclamation),
            '=' => self.either('=', TokenKind::DoubleEqual, TokenKind::Unknown),
            '&' => self.either('&', TokenKind::DoubleAmpersand, TokenKind::Ampersand),
            '|' => self.either('|', TokenKind::DoublePipe, TokenKind::Pipe),

            '<' => {
                if self.match_char('<') {
                    TokenKind::DoubleLess
                } else {
                    self.either('=', TokenKind::LessEqual, TokenKind::Less)
                }
            }

            '>' => {
                if self.match_char('>') {
                    TokenKind::DoubleGreater
                } else {
                    self.either('=', TokenKind::GreaterEqual, TokenKind::Greater)
                }
            }

            '"' => self.string(),
            '$' => self.variable(),
            '0'..='9' => self.number(ch),
            c if is_ident_start(c) => self.identifier(),

            _ => TokenKind::Unknown,
        };

        self.make_token(kind, start)
    }

    /// Builds a token whose lexeme runs from `start` to the cursor.
    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        let lexeme: String = self.chars[start..self.current].iter().collect();
        Token::new(kind, lexeme, Span::new(start, self.current - 1))
    }

    /// Consumes `expected` if present and yields `matched`, otherwise
    /// yields `single`.
    fn either(&mut self, expected: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.match_char(expected) {
            matched
        } else {
            single
        }
    }

    /// Scans a double-quoted string. The opening quote is already consumed.
    ///
    /// A backslash always escapes the following character, so `\"` does not
    /// terminate the literal. Running off the end of the line produces an
    /// `Unknown` token covering the rest of the input.
    fn string(&mut self) -> TokenKind {
        while !self.is_at_end() {
            match self.advance() {
                '"' => return TokenKind::String,
                '\\' if !self.is_at_end() => {
                    self.advance();
                }
                _ => {}
            }
        }

        TokenKind::Unknown
    }

    /// Scans `$name`. The `$` is already consumed.
    fn variable(&mut self) -> TokenKind {
        if !is_ident_continue(self.peek()) {
            return TokenKind::Unknown;
        }

        while is_ident_continue(self.peek()) {
            self.advance();
        }

        TokenKind::Variable
    }

    /// Scans an integer or floating-point literal.
    ///
    /// # Examples
    /// - `42`, `0x7fff`, `0b1010`, `0o17`
    /// - `3.1415`, `6.02e23`, `1E-9`
    fn number(&mut self, first: char) -> TokenKind {
        if first == '0' {
            let radix = match self.peek() {
                'x' | 'X' => Some(16),
                'o' | 'O' => Some(8),
                'b' | 'B' => Some(2),
                _ => None,
            };

            if let Some(radix) = radix {
                if self.peek_next().is_digit(radix) {
                    self.advance(); // radix marker
                    while self.peek().is_digit(radix) {
                        self.advance();
                    }
                    return TokenKind::Integer;
                }
            }
        }

        self.digits();

        let mut kind = TokenKind::Integer;

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // '.'
            self.digits();
            kind = TokenKind::Float;
        }

        if matches!(self.peek(), 'e' | 'E') {
            let signed = matches!(self.peek_next(), '+' | '-');
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_ascii_digit() {
                for _ in 0..digit_at {
                    self.advance();
                }
                self.digits();
                kind = TokenKind::Float;
            }
        }

        kind
    }

    fn digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    /// Scans the remainder of an identifier.
    fn identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.peek()) {
            self.advance();
        }
        TokenKind::Identifier
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Conditionally consumes the next character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances the cursor by one character.
    ///
    /// Caller must ensure the end of the line has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character, or `'\0'` at the end of the line.
    fn peek(&self) -> char {
        self.peek_at(0)
    }

    fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    fn peek_at(&self, offset: usize) -> char {
        self.chars
            .get(self.current + offset)
            .copied()
            .unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

impl TokenStream for Lexer {
    fn next_token(&mut self) -> Token {
        self.scan_token()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '.'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        Lexer::new(line).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn scans_command_with_mixed_arguments() {
        let tokens = Lexer::new("mem $sp 0x10 \"x\"").tokenize();
        let summary: Vec<(TokenKind, &str, Span)> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.span))
            .collect();

        assert_eq!(
            summary,
            vec![
                (TokenKind::Identifier, "mem", Span::new(0, 2)),
                (TokenKind::Variable, "$sp", Span::new(4, 6)),
                (TokenKind::Integer, "0x10", Span::new(8, 11)),
                (TokenKind::String, "\"x\"", Span::new(13, 15)),
                (TokenKind::Eof, "", Span::point(16)),
            ]
        );
    }

    #[test]
    fn multi_character_operators_take_priority() {
        assert_eq!(
            kinds("<< >> <= >= == != && || < > & | ! ~ ^"),
            vec![
                TokenKind::DoubleLess,
                TokenKind::DoubleGreater,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::DoubleEqual,
                TokenKind::ExclamationEqual,
                TokenKind::DoubleAmpersand,
                TokenKind::DoublePipe,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Ampersand,
                TokenKind::Pipe,
                TokenKind::Exclamation,
                TokenKind::Tilde,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn operators_need_no_whitespace() {
        assert_eq!(
            kinds("2*(3-1)"),
            vec![
                TokenKind::Integer,
                TokenKind::Star,
                TokenKind::OpenParen,
                TokenKind::Integer,
                TokenKind::Minus,
                TokenKind::Integer,
                TokenKind::CloseParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn numbers_classify_as_integer_or_float() {
        assert_eq!(kinds("7")[0], TokenKind::Integer);
        assert_eq!(kinds("0b101")[0], TokenKind::Integer);
        assert_eq!(kinds("3.25")[0], TokenKind::Float);
        assert_eq!(kinds("1e9")[0], TokenKind::Float);
        assert_eq!(kinds("2.5E-3")[0], TokenKind::Float);

        // A dot not followed by a digit does not belong to the number.
        assert_eq!(
            kinds("1.x"),
            vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn unclassifiable_input_becomes_unknown() {
        assert_eq!(
            kinds("@ = $ \"open"),
            vec![
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Eof,
            ]
        );

        let tokens = Lexer::new("say \"open").tokenize();
        assert_eq!(tokens[1].lexeme, "\"open");
        assert_eq!(tokens[1].span, Span::new(4, 8));
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        let tokens = Lexer::new(r#""a\"b" c"#).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r#""a\"b""#);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn eof_repeats_after_end_of_line() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let eof = lexer.next_token();
            assert_eq!(eof.kind, TokenKind::Eof);
            assert_eq!(eof.span, Span::point(1));
        }
    }

    #[test]
    fn directives_lex_as_identifiers() {
        let tokens = Lexer::new(".byte").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, ".byte");
    }
}
