/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Syntax tree produced by the command parser.
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

/// Operator opcodes.
pub mod ops;

/// Expression nodes.
pub mod expr;

/// The command root node.
pub mod command;

pub use command::Command;
pub use expr::Expr;
pub use ops::{BinaryOp, UnaryOp};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn int(value: i64, col: usize) -> Expr {
        Expr::Integer {
            value,
            span: Span::point(col),
        }
    }

    #[test]
    fn operator_nodes_cover_operands_and_operator() {
        // 1 + -(2)
        let neg = Expr::unary(UnaryOp::Minus, Span::point(4), int(2, 6), Span::new(4, 7));
        assert_eq!(neg.span(), Span::new(4, 7));

        let sum = Expr::binary(BinaryOp::Add, Span::point(2), int(1, 0), neg, Span::new(0, 7));
        assert_eq!(sum.span(), Span::new(0, 7));
        assert!(sum.span().contains(&Span::point(6)));
        assert_eq!(sum.node_count(), 4);
        assert_eq!(sum.to_string(), "ADD(Integer(1), MINUS(Integer(2)))");
    }

    #[test]
    fn json_uses_tagged_nodes_and_opcode_names() {
        let expr = Expr::unary(UnaryOp::BitNegate, Span::point(0), int(1, 1), Span::new(0, 1));
        let json = serde_json::to_value(&expr).unwrap();

        assert_eq!(json["kind"], "unary");
        assert_eq!(json["op"], "BIT_NEGATE");
        assert_eq!(json["operand"]["kind"], "integer");
        assert_eq!(json["operand"]["value"], 1);
        assert_eq!(json["span"]["start"], 0);
        assert_eq!(json["span"]["end"], 1);
    }

    #[test]
    fn command_display_lists_arguments() {
        let cmd = Command::new("mem", Span::new(0, 2), vec![int(1, 4), int(2, 6)]);
        assert_eq!(cmd.to_string(), "mem [Integer(1), Integer(2)]");
    }
}
