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

use std::io;
use std::path::PathBuf;

/// Syntax errors detected while parsing a command line.
///
/// The parser never returns these; it renders them through the diagnostic
/// sink at the point of detection and hands back an absent result. The
/// `Display` text is the exact message the user sees.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unmatched parentheses")]
    UnmatchedParentheses,

    #[error("invalid character in input")]
    InvalidCharacter,

    #[error("expected primary expression")]
    ExpectedPrimary,

    #[error("expected command")]
    ExpectedCommand,

    #[error("expression nested too deeply (limit is {limit})")]
    NestingTooDeep { limit: usize },
}

/// Failures of the line-input layer.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("input redirection stack too deep (limit is {limit})")]
    RedirectTooDeep { limit: usize },

    #[error("could not open file `{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_messages_are_stable() {
        assert_eq!(
            SyntaxError::UnmatchedParentheses.to_string(),
            "unmatched parentheses"
        );
        assert_eq!(
            SyntaxError::InvalidCharacter.to_string(),
            "invalid character in input"
        );
        assert_eq!(
            SyntaxError::ExpectedPrimary.to_string(),
            "expected primary expression"
        );
        assert_eq!(SyntaxError::ExpectedCommand.to_string(), "expected command");
        assert_eq!(
            SyntaxError::NestingTooDeep { limit: 8 }.to_string(),
            "expression nested too deeply (limit is 8)"
        );
    }

    #[test]
    fn open_error_keeps_source() {
        use std::error::Error as _;

        let err = InputError::Open {
            path: PathBuf::from("missing.s"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not open file `missing.s'");
        assert!(err.source().is_some());
    }
}
