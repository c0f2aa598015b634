//! Operator evaluation on already-evaluated operands.

use num_traits::Zero;
use sipl_ir::{ArithOp, UnaryOp};

use crate::errors::{division_by_zero, type_mismatch, EvalResult};
use crate::Value;

pub(super) fn evaluate_unary(op: UnaryOp, operand: Value) -> EvalResult<Value> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => Ok(Value::Int(-n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, other) => Err(operand_mismatch(op.symbol(), "integer", &other)),
        (UnaryOp::Not, other) => Err(operand_mismatch(op.symbol(), "boolean", &other)),
    }
}

/// Integer arithmetic and comparison.
///
/// A zero divisor is reported before operand types are checked, so
/// `true / 0` is a division by zero rather than a type mismatch.
pub(super) fn evaluate_arith(op: ArithOp, left: Value, right: Value) -> EvalResult<Value> {
    if op == ArithOp::Div && matches!(&right, Value::Int(n) if n.is_zero()) {
        return Err(division_by_zero());
    }

    let (a, b) = match (left, right) {
        (Value::Int(a), Value::Int(b)) => (a, b),
        (Value::Int(_), other) | (other, _) => {
            return Err(operand_mismatch(op.symbol(), "integer", &other));
        }
    };

    Ok(match op {
        ArithOp::Add => Value::Int(a + b),
        ArithOp::Sub => Value::Int(a - b),
        ArithOp::Mul => Value::Int(a * b),
        // BigInt division truncates toward zero.
        ArithOp::Div => Value::Int(a / b),
        ArithOp::Eq => Value::Bool(a == b),
        ArithOp::NotEq => Value::Bool(a != b),
        ArithOp::Lt => Value::Bool(a < b),
        ArithOp::LtEq => Value::Bool(a <= b),
        ArithOp::Gt => Value::Bool(a > b),
        ArithOp::GtEq => Value::Bool(a >= b),
    })
}

#[cold]
fn operand_mismatch(symbol: &str, expected: &'static str, got: &Value) -> crate::EvalError {
    type_mismatch(format!("'{symbol}'"), expected, got.type_name())
}
