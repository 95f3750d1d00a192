/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     input.rs
 * Purpose:  Line input with history and a stack of redirected sources.
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

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{InputError, InputResult};

/// Limit on the depth of the redirection stack, so a script that sources
/// itself cannot recurse forever.
pub const MAX_REDIRECT_DEPTH: usize = 128;

/// A redirected input source and the name it is reported under.
struct Source {
    name: String,
    reader: Box<dyn BufRead>,
    line_no: usize,
}

/// Supplies the REPL one line at a time.
///
/// Lines come from the innermost redirected source if there is one, and
/// from the interactive reader otherwise. A redirected source that runs
/// out is closed and reading falls back to the next one down.
///
/// Only interactive lines are prompted for and recorded in history.
pub struct LineReader<R: BufRead, W: Write> {
    interactive: R,
    prompt_out: W,
    stack: Vec<Source>,
    history: Vec<String>,
    interactive_line_no: usize,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(interactive: R, prompt_out: W) -> Self {
        Self {
            interactive,
            prompt_out,
            stack: Vec::new(),
            history: Vec::new(),
            interactive_line_no: 0,
        }
    }

    /// Reads the next line without its line terminator.
    ///
    /// Input is taken as bytes and decoded lossily, so a stray non-UTF-8
    /// byte shows up as U+FFFD for the parser to reject rather than ending
    /// the session. A redirected source that fails to read is closed with a
    /// warning and reading continues one level down.
    ///
    /// Returns `Ok(None)` once the interactive reader reaches end of file.
    pub fn read_line(&mut self, prompt: &str) -> InputResult<Option<String>> {
        let mut buf = Vec::new();

        while let Some(top) = self.stack.last_mut() {
            buf.clear();
            match top.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    tracing::debug!(source = %top.name, "redirected input exhausted");
                    self.stack.pop();
                }
                Ok(_) => {
                    top.line_no += 1;
                    return Ok(Some(decode_line(&buf)));
                }
                Err(err) => {
                    tracing::warn!(source = %top.name, line = top.line_no + 1, error = %err, "closing unreadable input");
                    self.stack.pop();
                }
            }
        }

        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        buf.clear();
        if self.interactive.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        self.interactive_line_no += 1;
        let line = decode_line(&buf);
        if !line.is_empty() {
            self.history.push(line.clone());
        }
        Ok(Some(line))
    }

    /// Opens `path` and reads from it until it is exhausted.
    pub fn redirect(&mut self, path: &Path) -> InputResult<()> {
        if self.stack.len() >= MAX_REDIRECT_DEPTH {
            return Err(InputError::RedirectTooDeep {
                limit: MAX_REDIRECT_DEPTH,
            });
        }

        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.push_source(path.display().to_string(), Box::new(BufReader::new(file)))
    }

    /// Pushes an arbitrary reader onto the redirection stack.
    pub fn push_source(&mut self, name: impl Into<String>, reader: Box<dyn BufRead>) -> InputResult<()> {
        if self.stack.len() >= MAX_REDIRECT_DEPTH {
            return Err(InputError::RedirectTooDeep {
                limit: MAX_REDIRECT_DEPTH,
            });
        }

        let name = name.into();
        tracing::debug!(source = %name, depth = self.stack.len() + 1, "redirecting input");
        self.stack.push(Source {
            name,
            reader,
            line_no: 0,
        });
        Ok(())
    }

    /// Name and line number of the line most recently returned.
    pub fn location(&self) -> (&str, usize) {
        match self.stack.last() {
            Some(source) => (&source.name, source.line_no),
            None => ("<stdin>", self.interactive_line_no),
        }
    }

    /// Number of redirected sources still open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Non-empty interactive lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Decodes a raw line and strips its `\n` or `\r\n` terminator.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
