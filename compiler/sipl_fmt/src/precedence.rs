//! Operator precedence and where parentheses are required.
//!
//! The parser only accepts `(` expression `)` around comparison-level
//! expressions and below, so `and`/`or` can never be parenthesized. The
//! rules here reproduce the grammar's shapes: `*` and `/` associate to the
//! right, `+` and `-` to the left, a comparison takes addsub operands, and
//! the right operand of `and` is unary.

use sipl_ir::{ArithOp, ExprKind, LogicalOp};

/// Binding strength of an expression form, loosest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prec {
    Or,
    And,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

impl Prec {
    /// Loosest level of a statement condition or assignment value.
    pub const BOOL_EXPR: Prec = Prec::Or;
    /// Loosest level of a function body, argument, branch, or parenthesized expression.
    pub const EXPRESSION: Prec = Prec::Comparison;

    pub fn of(kind: &ExprKind) -> Prec {
        match kind {
            ExprKind::Logical {
                op: LogicalOp::Or, ..
            } => Prec::Or,
            ExprKind::Logical {
                op: LogicalOp::And,
                ..
            } => Prec::And,
            ExprKind::Arith { op, .. } => Self::of_arith(*op),
            ExprKind::Unary { .. } => Prec::Unary,
            ExprKind::Literal(_)
            | ExprKind::Variable(_)
            | ExprKind::If { .. }
            | ExprKind::Call { .. } => Prec::Primary,
        }
    }

    fn of_arith(op: ArithOp) -> Prec {
        match op {
            ArithOp::Add | ArithOp::Sub => Prec::Additive,
            ArithOp::Mul | ArithOp::Div => Prec::Multiplicative,
            ArithOp::Eq
            | ArithOp::NotEq
            | ArithOp::Lt
            | ArithOp::LtEq
            | ArithOp::Gt
            | ArithOp::GtEq => Prec::Comparison,
        }
    }
}

/// Minimum precedence the left and right operands of `kind` may have
/// without parentheses. `None` for forms without two operands.
pub fn operand_prec(kind: &ExprKind) -> Option<(Prec, Prec)> {
    match kind {
        ExprKind::Logical {
            op: LogicalOp::Or, ..
        } => Some((Prec::Or, Prec::And)),
        ExprKind::Logical {
            op: LogicalOp::And,
            ..
        } => Some((Prec::And, Prec::Unary)),
        ExprKind::Arith { op, .. } => Some(match Prec::of_arith(*op) {
            Prec::Additive => (Prec::Additive, Prec::Multiplicative),
            Prec::Multiplicative => (Prec::Unary, Prec::Multiplicative),
            _ => (Prec::Additive, Prec::Additive),
        }),
        ExprKind::Literal(_)
        | ExprKind::Variable(_)
        | ExprKind::Unary { .. }
        | ExprKind::If { .. }
        | ExprKind::Call { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipl_ir::{ExprId, Literal, Name};

    fn arith(op: ArithOp) -> ExprKind {
        ExprKind::Arith {
            op,
            left: ExprId::new(0),
            right: ExprId::new(1),
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Prec::Or < Prec::And);
        assert!(Prec::Comparison < Prec::Additive);
        assert!(Prec::Unary < Prec::Primary);
    }

    #[test]
    fn test_of() {
        assert_eq!(Prec::of(&arith(ArithOp::LtEq)), Prec::Comparison);
        assert_eq!(Prec::of(&arith(ArithOp::Sub)), Prec::Additive);
        assert_eq!(Prec::of(&arith(ArithOp::Div)), Prec::Multiplicative);
        assert_eq!(Prec::of(&ExprKind::Variable(Name::EMPTY)), Prec::Primary);
        assert_eq!(
            Prec::of(&ExprKind::Literal(Literal::Bool(true))),
            Prec::Primary
        );
    }

    #[test]
    fn test_associativity() {
        // left-assoc: `a - b - c`; right operand needs parens if additive
        assert_eq!(
            operand_prec(&arith(ArithOp::Sub)),
            Some((Prec::Additive, Prec::Multiplicative))
        );
        // right-assoc: `a / b / c` is `a / (b / c)`
        assert_eq!(
            operand_prec(&arith(ArithOp::Div)),
            Some((Prec::Unary, Prec::Multiplicative))
        );
        // single-shot comparison
        assert_eq!(
            operand_prec(&arith(ArithOp::Eq)),
            Some((Prec::Additive, Prec::Additive))
        );
    }
}
