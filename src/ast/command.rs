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

use crate::ast::Expr;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// One parsed input line: a command name followed by its arguments.
///
/// Arguments that failed to parse are omitted, so a command whose every
/// argument was malformed looks the same as one given no arguments. Only
/// the reported diagnostics tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub name: String,

    /// Span of the command name token.
    pub span: Span,

    pub args: Vec<Expr>,
}

impl Command {
    pub fn new(name: impl Into<String>, span: Span, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            span,
            args,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str("]")
    }
}
