/*
 * ==========================================================================
 * ASMASE - Interactive Assembly REPL
 * ==========================================================================
 *
 * File:     parser/operators.rs
 * Purpose:  Operator lookup tables used by the expression parser.
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

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::TokenKind;

/// Precedence of "not a binary operator". Lower than every real operator,
/// and below the initial floor of 0, so it always ends a climbing loop.
pub const NO_PRECEDENCE: i32 = -1;

/// Maps a token kind to the prefix operator it spells, if any.
pub const fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Minus),
        TokenKind::Exclamation => Some(UnaryOp::LogicNegate),
        TokenKind::Tilde => Some(UnaryOp::BitNegate),
        _ => None,
    }
}

/// Maps a token kind to the infix operator it spells, if any.
pub const fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Subtract),
        TokenKind::Star => Some(BinaryOp::Multiply),
        TokenKind::Slash => Some(BinaryOp::Divide),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::DoubleEqual => Some(BinaryOp::Equals),
        TokenKind::ExclamationEqual => Some(BinaryOp::NotEquals),
        TokenKind::Greater => Some(BinaryOp::GreaterThan),
        TokenKind::Less => Some(BinaryOp::LessThan),
        TokenKind::GreaterEqual => Some(BinaryOp::GreaterThanOrEquals),
        TokenKind::LessEqual => Some(BinaryOp::LessThanOrEquals),
        TokenKind::DoubleAmpersand => Some(BinaryOp::LogicAnd),
        TokenKind::DoublePipe => Some(BinaryOp::LogicOr),
        TokenKind::Ampersand => Some(BinaryOp::BitAnd),
        TokenKind::Pipe => Some(BinaryOp::BitOr),
        TokenKind::Caret => Some(BinaryOp::BitXor),
        TokenKind::DoubleLess => Some(BinaryOp::LeftShift),
        TokenKind::DoubleGreater => Some(BinaryOp::RightShift),
        _ => None,
    }
}

/// Binding strength of an infix operator; higher binds tighter.
///
/// ```text
/// * / %            700
/// + -              600
/// << >>            500
/// < > <= >=        400
/// == !=            300
/// &                266
/// ^                233
/// |                200
/// &&               150
/// ||               100
/// (none)            -1
/// ```
pub const fn precedence(op: Option<BinaryOp>) -> i32 {
    let Some(op) = op else {
        return NO_PRECEDENCE;
    };

    match op {
        BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Mod => 700,

        BinaryOp::Add | BinaryOp::Subtract => 600,

        BinaryOp::LeftShift | BinaryOp::RightShift => 500,

        BinaryOp::GreaterThan
        | BinaryOp::LessThan
        | BinaryOp::GreaterThanOrEquals
        | BinaryOp::LessThanOrEquals => 400,

        BinaryOp::Equals | BinaryOp::NotEquals => 300,

        BinaryOp::BitAnd => 266,
        BinaryOp::BitXor => 233,
        BinaryOp::BitOr => 200,

        BinaryOp::LogicAnd => 150,
        BinaryOp::LogicOr => 100,
    }
}

/// Precedence of whatever infix operator `kind` spells.
pub const fn token_precedence(kind: TokenKind) -> i32 {
    precedence(binary_op(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Operator groups from tightest to loosest binding.
    const GROUPS: &[&[BinaryOp]] = &[
        &[BinaryOp::Multiply, BinaryOp::Divide, BinaryOp::Mod],
        &[BinaryOp::Add, BinaryOp::Subtract],
        &[BinaryOp::LeftShift, BinaryOp::RightShift],
        &[
            BinaryOp::GreaterThan,
            BinaryOp::LessThan,
            BinaryOp::GreaterThanOrEquals,
            BinaryOp::LessThanOrEquals,
        ],
        &[BinaryOp::Equals, BinaryOp::NotEquals],
        &[BinaryOp::BitAnd],
        &[BinaryOp::BitXor],
        &[BinaryOp::BitOr],
        &[BinaryOp::LogicAnd],
        &[BinaryOp::LogicOr],
    ];

    fn group_of(op: BinaryOp) -> usize {
        GROUPS
            .iter()
            .position(|g| g.contains(&op))
            .unwrap_or_else(|| panic!("{op} missing from groups"))
    }

    #[test]
    fn every_operator_belongs_to_exactly_one_group() {
        let total: usize = GROUPS.iter().map(|g| g.len()).sum();
        assert_eq!(total, BinaryOp::ALL.len());
        for op in BinaryOp::ALL {
            group_of(op);
        }
    }

    #[test]
    fn precedence_order_matches_groups_for_every_pair() {
        for a in BinaryOp::ALL {
            for b in BinaryOp::ALL {
                let (pa, pb) = (precedence(Some(a)), precedence(Some(b)));
                match group_of(a).cmp(&group_of(b)) {
                    std::cmp::Ordering::Less => assert!(pa > pb, "{a} should bind tighter than {b}"),
                    std::cmp::Ordering::Equal => assert_eq!(pa, pb),
                    std::cmp::Ordering::Greater => assert!(pa < pb, "{a} should bind looser than {b}"),
                }
            }
        }
    }

    #[test]
    fn none_is_below_every_operator_and_the_floor() {
        assert_eq!(precedence(None), NO_PRECEDENCE);
        assert!(precedence(None) < 0);
        for op in BinaryOp::ALL {
            assert!(precedence(Some(op)) > precedence(None));
        }
    }

    #[test]
    fn documented_values() {
        assert_eq!(precedence(Some(BinaryOp::Multiply)), 700);
        assert_eq!(precedence(Some(BinaryOp::Add)), 600);
        assert_eq!(precedence(Some(BinaryOp::LeftShift)), 500);
        assert_eq!(precedence(Some(BinaryOp::LessThan)), 400);
        assert_eq!(precedence(Some(BinaryOp::NotEquals)), 300);
        assert_eq!(precedence(Some(BinaryOp::BitAnd)), 266);
        assert_eq!(precedence(Some(BinaryOp::BitXor)), 233);
        assert_eq!(precedence(Some(BinaryOp::BitOr)), 200);
        assert_eq!(precedence(Some(BinaryOp::LogicAnd)), 150);
        assert_eq!(precedence(Some(BinaryOp::LogicOr)), 100);
    }

    #[test]
    fn plus_and_minus_are_both_unary_and_binary() {
        assert_eq!(unary_op(TokenKind::Minus), Some(UnaryOp::Minus));
        assert_eq!(binary_op(TokenKind::Minus), Some(BinaryOp::Subtract));
        assert_eq!(unary_op(TokenKind::Tilde), Some(UnaryOp::BitNegate));
        assert_eq!(binary_op(TokenKind::Tilde), None);
        assert_eq!(unary_op(TokenKind::Star), None);
        assert_eq!(token_precedence(TokenKind::Eof), NO_PRECEDENCE);
        assert_eq!(token_precedence(TokenKind::CloseParen), NO_PRECEDENCE);
    }
}
