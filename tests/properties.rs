//! Property-based tests for the expression parser using proptest.
//!
//! These tests verify that:
//! 1. A fully parenthesized rendering of a random tree parses back to it
//! 2. Every child span lies inside its parent's span, and operator nodes
//!    reach out to cover parentheses around their operands
//! 3. Mixing any two infix operators groups by the precedence table
//! 4. Parsing the same tokens twice gives identical trees and diagnostics

use proptest::prelude::*;
use proptest::sample::select;

use asmase::parser::operators::precedence;
use asmase::{
    parse_command_line, parse_expression_line, BinaryOp, Diagnostics, Expr, Span, UnaryOp,
};

/// (source text, expected tree notation)
type Case = (String, String);

fn leaf_strategy() -> impl Strategy<Value = Case> {
    prop_oneof![
        (0i64..1_000_000).prop_map(|n| (n.to_string(), format!("Integer({})", n))),
        "[a-z_][a-z0-9_]{0,6}".prop_map(|s| (s.clone(), format!("Identifier({})", s))),
        "[a-z]{1,6}".prop_map(|s| (format!("${}", s), format!("Variable({})", s))),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Case> {
    leaf_strategy().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (select(UnaryOp::ALL.to_vec()), inner.clone()).prop_map(|(op, (src, tree))| {
                (format!("{}({})", op.symbol(), src), format!("{}({})", op, tree))
            }),
            (select(BinaryOp::ALL.to_vec()), inner.clone(), inner).prop_map(
                |(op, (lsrc, ltree), (rsrc, rtree))| {
                    (
                        format!("({} {} {})", lsrc, op.symbol(), rsrc),
                        format!("{}({}, {})", op, ltree, rtree),
                    )
                }
            ),
        ]
    })
}

/// Loosely parenthesized line noise, including tokens that fail to parse.
fn noisy_line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        select(vec![
            "1", "x", "$v", "\"s\"", "2.5", "(", ")", "+", "-", "*", "<<", "==", "&&", "!", "~", "@",
            "|", "^",
        ]),
        0..16,
    )
    .prop_map(|parts| format!("cmd {}", parts.join(" ")))
}

/// Parent spans may be wider than the union of their children, since
/// parentheses leave no node of their own, but never narrower.
fn assert_spans_nested(expr: &Expr) {
    match expr {
        Expr::Unary {
            op_span,
            operand,
            span,
            ..
        } => {
            assert!(span.contains(op_span));
            assert!(span.contains(&operand.span()));
            assert_spans_nested(operand);
        }
        Expr::Binary {
            op_span,
            left,
            right,
            span,
            ..
        } => {
            assert!(span.contains(op_span));
            assert!(span.contains(&left.span()));
            assert!(span.contains(&right.span()));
            assert!(left.span().end < op_span.start);
            assert!(op_span.end < right.span().start);
            assert_spans_nested(left);
            assert_spans_nested(right);
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parenthesized_rendering_parses_back((src, tree) in expr_strategy()) {
        let mut diags = Diagnostics::new();
        let expr = parse_expression_line(&src, &mut diags);
        prop_assert!(diags.is_empty(), "diagnostics for {}: {:?}", src, diags);

        let expr = expr.expect("well-formed input parses");
        prop_assert_eq!(expr.to_string(), tree);
        assert_spans_nested(&expr);

        // A binary rendering is wrapped in one group that leaves no node;
        // everything else spans the whole line.
        let last = src.chars().count() - 1;
        let expected = if src.starts_with('(') {
            Span::new(1, last - 1)
        } else {
            Span::new(0, last)
        };
        prop_assert_eq!(expr.span(), expected);
    }

    #[test]
    fn two_operators_group_by_precedence(
        a in select(BinaryOp::ALL.to_vec()),
        b in select(BinaryOp::ALL.to_vec()),
    ) {
        let src = format!("x {} y {} z", a.symbol(), b.symbol());
        let mut diags = Diagnostics::new();
        let expr = parse_expression_line(&src, &mut diags).expect("parses");
        prop_assert!(diags.is_empty());

        let expected = if precedence(Some(a)) >= precedence(Some(b)) {
            format!("{}({}(Identifier(x), Identifier(y)), Identifier(z))", b, a)
        } else {
            format!("{}(Identifier(x), {}(Identifier(y), Identifier(z)))", a, b)
        };
        prop_assert_eq!(expr.to_string(), expected);
    }

    #[test]
    fn parsing_is_deterministic(line in noisy_line_strategy()) {
        let mut first_diags = Diagnostics::new();
        let first = parse_command_line(&line, &mut first_diags);
        let mut second_diags = Diagnostics::new();
        let second = parse_command_line(&line, &mut second_diags);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first_diags.into_vec(), second_diags.into_vec());

        // The line starts with a command name, so recovery always produces
        // a command.
        prop_assert!(first.is_some());
    }
}
