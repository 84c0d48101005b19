//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the closed `Value` set. Arithmetic and
//! relational operators are defined on integer pairs only; `==` is defined
//! on every pair and never fails.

use fwjs_ir::BinaryOp;

use crate::errors::{division_by_zero, modulo_by_zero, type_mismatch};
use crate::{EvalResult, Value};

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Eq {
        return Ok(Value::Bool(left == right));
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        // Report the first operand that is not an integer
        (Value::Int(_), other) | (other, _) => Err(type_mismatch(
            format!("operator `{op}`"),
            "int",
            other.type_name(),
        )),
    }
}

/// Binary operations on integers.
///
/// `+ - *` wrap on overflow. `/` and `%` truncate toward zero, and
/// `i64::MIN / -1` wraps to `i64::MIN`.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Int(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Int(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Int(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Int(a.wrapping_div(b))
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            Value::Int(a.wrapping_rem(b))
        }
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
    };
    Ok(value)
}
