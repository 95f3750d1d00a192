/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the command-line parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser state
 *   - Operator tables
 *   - Expression parsing
 *   - Command parsing and recovery
 *   - Shared helper utilities
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

/// Core parser state:
/// - Owns the `Parser` struct
/// - Token cursor, diagnostic sink and nesting budget
#[allow(clippy::module_inception)]
pub mod parser;

/// Token kind → operator and operator → precedence tables.
pub mod operators;

/// Expression-level parsing:
/// - primary → unary → precedence climbing
pub mod expressions;

/// Command-level parsing:
/// - command name
/// - argument list with single-token recovery
pub mod commands;

/// Shared parser helpers:
/// - token consumption
/// - error reporting
/// - nesting guard
pub mod helpers;


pub use parser::Parser;

/// Default bound on nested prefix operators and parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many unary-level parses may be open at once. Each prefix
    /// operator, each parenthesized group and the innermost operand take
    /// one level; going past the limit fails with a nesting diagnostic.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
