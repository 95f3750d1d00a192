/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     span.rs
 * Purpose:  Column spans for tokens and AST nodes.
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

use serde::Serialize;
use std::fmt;

/// An inclusive range of character columns on a single input line.
///
/// Every command is typed on one physical line, so a column is all the
/// position information a token or node needs. Columns are 0-based; the
/// diagnostic printer adds one when displaying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// First column covered.
    pub start: usize,

    /// Last column covered (inclusive).
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span sitting on a single column, used for `Eof`.
    pub const fn point(column: usize) -> Self {
        Self { start: column, end: column }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns true if `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_covers_both_sides() {
        let joined = Span::new(4, 4).to(Span::new(0, 1));
        assert_eq!(joined, Span::new(0, 4));
        assert!(joined.contains(&Span::new(2, 3)));
        assert!(!joined.contains(&Span::new(3, 5)));
    }
}
