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

use serde::Serialize;
use std::fmt;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnaryOp {
    Plus,
    Minus,
    LogicNegate,
    BitNegate,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [
        UnaryOp::Plus,
        UnaryOp::Minus,
        UnaryOp::LogicNegate,
        UnaryOp::BitNegate,
    ];

    /// Opcode name as shown in tree output.
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Plus => "PLUS",
            UnaryOp::Minus => "MINUS",
            UnaryOp::LogicNegate => "LOGIC_NEGATE",
            UnaryOp::BitNegate => "BIT_NEGATE",
        }
    }

    /// Source spelling of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::LogicNegate => "!",
            UnaryOp::BitNegate => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    LogicAnd,
    LogicOr,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 18] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Mod,
        BinaryOp::Equals,
        BinaryOp::NotEquals,
        BinaryOp::GreaterThan,
        BinaryOp::LessThan,
        BinaryOp::GreaterThanOrEquals,
        BinaryOp::LessThanOrEquals,
        BinaryOp::LogicAnd,
        BinaryOp::LogicOr,
        BinaryOp::BitAnd,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::LeftShift,
        BinaryOp::RightShift,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "ADD",
            BinaryOp::Subtract => "SUBTRACT",
            BinaryOp::Multiply => "MULTIPLY",
            BinaryOp::Divide => "DIVIDE",
            BinaryOp::Mod => "MOD",
            BinaryOp::Equals => "EQUALS",
            BinaryOp::NotEquals => "NOT_EQUALS",
            BinaryOp::GreaterThan => "GREATER_THAN",
            BinaryOp::LessThan => "LESS_THAN",
            BinaryOp::GreaterThanOrEquals => "GREATER_THAN_OR_EQUALS",
            BinaryOp::LessThanOrEquals => "LESS_THAN_OR_EQUALS",
            BinaryOp::LogicAnd => "LOGIC_AND",
            BinaryOp::LogicOr => "LOGIC_OR",
            BinaryOp::BitAnd => "BIT_AND",
            BinaryOp::BitOr => "BIT_OR",
            BinaryOp::BitXor => "BIT_XOR",
            BinaryOp::LeftShift => "LEFT_SHIFT",
            BinaryOp::RightShift => "RIGHT_SHIFT",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThanOrEquals => ">=",
            BinaryOp::LessThanOrEquals => "<=",
            BinaryOp::LogicAnd => "&&",
            BinaryOp::LogicOr => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
