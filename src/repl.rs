/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     repl.rs
 * Purpose:  The read-parse-print loop driving the command parser.
 *
 * Each input line is tokenized and parsed into a `Command`. Syntax errors
 * are rendered with a caret under the offending column and the prompt
 * comes back. A handful of session commands are handled here; everything
 * else is printed in the configured format for whatever executes it.
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

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::ast::{Command, Expr};
use crate::diagnostics::DiagnosticPrinter;
use crate::error::InputResult;
use crate::input::LineReader;
use crate::lexer::Lexer;
use crate::parser::{Parser, ParserConfig};

pub const DEFAULT_PROMPT: &str = "asmase> ";

/// How parsed commands are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Functional notation: `mem [ADD(Variable(sp), Integer(8))]`.
    #[default]
    Tree,
    /// One JSON document per line.
    Json,
    /// Pretty-printed `Debug` output, spans included.
    Debug,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub format: OutputFormat,
    pub parser: ParserConfig,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::default(),
            parser: ParserConfig::default(),
        }
    }
}

/// What the session should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session.
///
/// `R`/`P` are the interactive input and where prompts go; `O` receives
/// parsed commands and `E` receives diagnostics and session errors.
pub struct Repl<R: BufRead, P: Write, O: Write, E: Write> {
    input: LineReader<R, P>,
    out: O,
    err: E,
    config: ReplConfig,
}

impl<R: BufRead, P: Write, O: Write, E: Write> Repl<R, P, O, E> {
    pub fn new(input: LineReader<R, P>, out: O, err: E, config: ReplConfig) -> Self {
        Self {
            input,
            out,
            err,
            config,
        }
    }

    /// Queues a script to run before the next interactive line.
    pub fn source(&mut self, path: &Path) -> InputResult<()> {
        self.input.redirect(path)
    }

    /// Runs until `quit`/`exit` or end of interactive input.
    pub fn run(&mut self) -> InputResult<()> {
        let mut lines = 0usize;

        while let Some(line) = self.input.read_line(&self.config.prompt)? {
            lines += 1;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        tracing::info!(lines, "session finished");
        Ok(())
    }

    /// Parses and dispatches one line of input.
    pub fn handle_line(&mut self, line: &str) -> InputResult<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let (origin, line_no) = self.input.location();
        let origin = origin.to_string();

        let command = {
            let mut printer = DiagnosticPrinter::new(&origin, line_no, line, &mut self.err);
            Parser::with_config(Lexer::new(line), &mut printer, self.config.parser).parse_command()
        };

        let Some(command) = command else {
            return Ok(Flow::Continue);
        };

        match command.name.as_str() {
            "quit" | "exit" => Ok(Flow::Quit),
            "source" => {
                self.source_command(&command)?;
                Ok(Flow::Continue)
            }
            "history" => {
                for (i, entry) in self.input.history().iter().enumerate() {
                    writeln!(self.out, "{:>5}  {}", i + 1, entry)?;
                }
                Ok(Flow::Continue)
            }
            _ => {
                self.emit(&command)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// `source "path"`: read commands from a file.
    ///
    /// Failures are reported and the session carries on.
    fn source_command(&mut self, command: &Command) -> InputResult<()> {
        let [Expr::String { value, .. }] = command.args.as_slice() else {
            writeln!(self.err, "usage: source \"path\"")?;
            return Ok(());
        };

        if let Err(err) = self.input.redirect(Path::new(value)) {
            tracing::warn!(path = %value, error = %err, "redirect failed");
            writeln!(self.err, "error: {}", err)?;
        }
        Ok(())
    }

    fn emit(&mut self, command: &Command) -> InputResult<()> {
        match self.config.format {
            OutputFormat::Tree => writeln!(self.out, "{}", command)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, command).map_err(io::Error::from)?;
                writeln!(self.out)?;
            }
            OutputFormat::Debug => writeln!(self.out, "{:#?}", command)?,
        }
        Ok(())
    }
}
