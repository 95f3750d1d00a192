/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Diagnostic sinks receiving parser errors.
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

use std::io::{self, Write};

/// Receives every syntax error the parser detects.
///
/// The parser reports each error exactly once, at the column where it was
/// detected, and keeps no record of it afterwards.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str, column: usize);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, message: &str, column: usize) {
        (**self).report(message, column)
    }
}

/// A single reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub column: usize,
}

/// A sink that simply collects what it is given.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, message: &str, column: usize) {
        self.items.push(Diagnostic {
            message: message.to_string(),
            column,
        });
    }
}

/// Renders compiler-style diagnostics for one line of input.
///
/// Output looks like:
/// ```text
/// error: unmatched parentheses
///   --> <stdin>:4:6
///    |
///   4 | regs (1 + 2
///    |      ^
/// ```
pub struct DiagnosticPrinter<'a, W: Write> {
    /// Where the line came from: `<stdin>` or a redirected file name.
    origin: &'a str,

    /// 1-based line number within `origin`.
    line_no: usize,

    /// The text of the line being parsed.
    source: &'a str,

    out: W,
}

impl<'a> DiagnosticPrinter<'a, io::Stderr> {
    pub fn stderr(origin: &'a str, line_no: usize, source: &'a str) -> Self {
        Self::new(origin, line_no, source, io::stderr())
    }
}

impl<'a, W: Write> DiagnosticPrinter<'a, W> {
    pub fn new(origin: &'a str, line_no: usize, source: &'a str, out: W) -> Self {
        Self {
            origin,
            line_no,
            source,
            out,
        }
    }

    fn render(&mut self, message: &str, column: usize) -> io::Result<()> {
        writeln!(self.out, "error: {}", message)?;
        writeln!(
            self.out,
            "  --> {}:{}:{}",
            self.origin,
            self.line_no,
            column + 1
        )?;
        writeln!(self.out, "   |")?;
        writeln!(self.out, "{:>3} | {}", self.line_no, self.source)?;
        writeln!(self.out, "   | {}^", " ".repeat(column))
    }
}

impl<W: Write> DiagnosticSink for DiagnosticPrinter<'_, W> {
    fn report(&mut self, message: &str, column: usize) {
        if let Err(err) = self.render(message, column) {
            tracing::warn!(error = %err, "failed to write diagnostic");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_report_order() {
        let mut sink = Diagnostics::new();
        sink.report("first", 3);
        sink.report("second", 0);

        let all = sink.into_vec();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "first");
        assert_eq!(all[0].column, 3);
        assert_eq!(all[1].column, 0);
    }

    #[test]
    fn printer_draws_caret_under_column() {
        let mut out = Vec::new();
        {
            let mut printer = DiagnosticPrinter::new("<stdin>", 4, "regs (1 + 2", &mut out);
            printer.report("unmatched parentheses", 5);
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "error: unmatched parentheses");
        assert_eq!(lines[1], "  --> <stdin>:4:6");
        assert_eq!(lines[3], "  4 | regs (1 + 2");
        assert_eq!(lines[4], "   |      ^");
    }
}
