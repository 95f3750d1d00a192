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

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::Level;

use asmase::input::LineReader;
use asmase::parser::{ParserConfig, DEFAULT_MAX_DEPTH};
use asmase::repl::{OutputFormat, Repl, ReplConfig, DEFAULT_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "asmase", version, about = "Interactive assembly REPL")]
struct Cli {
    /// Scripts to run before reading from the terminal, first one first.
    #[arg(short = 'f', long = "file")]
    files: Vec<PathBuf>,

    /// How parsed commands are printed.
    #[arg(long, value_enum, default_value_t = FormatChoice::Tree)]
    format: FormatChoice,

    /// Maximum nesting of parentheses and prefix operators.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prompt shown before each interactive line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Tree,
    Json,
    Debug,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Tree => OutputFormat::Tree,
            FormatChoice::Json => OutputFormat::Json,
            FormatChoice::Debug => OutputFormat::Debug,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = ReplConfig {
        prompt: cli.prompt,
        format: cli.format.into(),
        parser: ParserConfig {
            max_depth: cli.max_depth,
        },
    };

    let stdin = io::stdin();
    let input = LineReader::new(stdin.lock(), io::stdout());
    let mut repl = Repl::new(input, io::stdout(), io::stderr(), config);

    // The stack is last-in first-out, so push in reverse to run the first
    // script first.
    for path in cli.files.iter().rev() {
        repl.source(path)
            .with_context(|| format!("failed to load script {}", path.display()))?;
    }

    repl.run().context("input failed")?;
    Ok(())
}
