use super::*;
use crate::StringInterner;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn int(arena: &mut ExprArena, n: i64) -> ExprId {
    arena.alloc_expr(Expr::new(
        ExprKind::Literal(Literal::Int(BigInt::from(n))),
        1,
        Span::DUMMY,
    ))
}

#[test]
fn test_alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Arith {
            op: ArithOp::Add,
            left: a,
            right: b,
        },
        1,
        Span::new(0, 5),
    ));

    assert_eq!(arena.expr_count(), 3);
    match &arena.get_expr(sum).kind {
        ExprKind::Arith { op, left, right } => {
            assert_eq!(*op, ArithOp::Add);
            assert_eq!(*left, a);
            assert_eq!(*right, b);
        }
        other => panic!("expected Arith, got {other:?}"),
    }
}

#[test]
fn test_expr_lists_are_independent() {
    let mut arena = ExprArena::new();
    let ids: Vec<_> = (0..4).map(|n| int(&mut arena, n)).collect();
    let first = arena.alloc_expr_list(ids[..2].iter().copied());
    let empty = arena.alloc_expr_list(std::iter::empty());
    let second = arena.alloc_expr_list(ids[2..].iter().copied());

    assert_eq!(arena.get_expr_list(first), &ids[..2]);
    assert!(empty.is_empty());
    assert_eq!(arena.get_expr_list(empty), &[] as &[ExprId]);
    assert_eq!(arena.get_expr_list(second), &ids[2..]);
}

#[test]
fn test_stmt_lists() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let value = int(&mut arena, 7);
    let stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::Assign {
            target: interner.intern("x"),
            value,
        },
        1,
        Span::DUMMY,
    ));
    let range = arena.alloc_stmt_list([stmt]);
    assert_eq!(range.len(), 1);
    assert_eq!(arena.get_stmt_list(range), &[stmt]);
    assert_eq!(arena.stmt_count(), 1);
}

#[test]
fn test_operator_mapping() {
    assert_eq!(ArithOp::from_token_kind(TokenKind::Slash), Some(ArithOp::Div));
    assert_eq!(ArithOp::from_token_kind(TokenKind::NotEq), Some(ArithOp::NotEq));
    assert_eq!(ArithOp::from_token_kind(TokenKind::And), None);
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Not), Some(UnaryOp::Not));
    assert!(ArithOp::GtEq.is_comparison());
    assert!(!ArithOp::Mul.is_comparison());
}

#[test]
fn test_invalid_expr_id() {
    assert!(!ExprId::INVALID.is_valid());
    assert!(ExprId::new(0).is_valid());
    assert_eq!(format!("{:?}", ExprId::INVALID), "ExprId::INVALID");
}
