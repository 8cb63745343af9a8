use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        operator::Op,
        value::core::{Num, Value},
    },
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Promotion rules:
/// - `Sum`, `Difference`, `Multiplication` and `Mod` yield a float if either
///   operand is a float, else an integer. Integer arithmetic wraps.
/// - `Power` and `FloatDivision` always yield a float; a zero divisor
///   propagates as IEEE infinity or `NaN` uninspected.
/// - `IntegerDivision` rounds both operands to the nearest integer first,
///   then truncates; a divisor that rounds to zero is a fatal fault.
/// - The bit operators round both operands and always yield an integer. The
///   shift amount is masked to 6 bits.
/// - Comparisons compare numerically (integers widen to floats when kinds
///   differ) and yield a boolean; `AndAlso`/`OrElse` evaluate the truthiness
///   of both operands and yield a boolean.
///
/// # Parameters
/// - `op`: The binary operator descriptor.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// A freshly constructed value, or a [`RuntimeError`] for integer division by
/// a rounded-zero divisor.
pub fn apply_binary(op: Op, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        Op::Power => Ok(Value::Float(left.as_f64().powf(right.as_f64()))),
        Op::Multiplication => Ok(promote(left, right, i64::wrapping_mul, |a, b| a * b)),
        Op::Sum => Ok(promote(left, right, i64::wrapping_add, |a, b| a + b)),
        Op::Difference => Ok(promote(left, right, i64::wrapping_sub, |a, b| a - b)),
        Op::FloatDivision => Ok(Value::Float(left.as_f64() / right.as_f64())),
        Op::IntegerDivision => {
            let divisor = right.rounded();
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Integer(left.rounded().wrapping_div(divisor)))
        },
        Op::Mod => match (left.num(), right.num()) {
            (Num::Int(a), Num::Int(b)) => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Integer(a.wrapping_rem(b)))
            },
            (a, b) => Ok(Value::Float(a.as_f64() % b.as_f64())),
        },
        Op::LeftBitshift => Ok(Value::Integer(shifted(left, right, i64::wrapping_shl))),
        Op::RightBitshift => Ok(Value::Integer(shifted(left, right, i64::wrapping_shr))),
        Op::Equality => Ok(Value::Bool(compare(left, right) == Some(Ordering::Equal))),
        Op::Inequality => Ok(Value::Bool(compare(left, right) != Some(Ordering::Equal))),
        Op::LessThan => Ok(Value::Bool(compare(left, right) == Some(Ordering::Less))),
        Op::GreaterThan => Ok(Value::Bool(compare(left, right) == Some(Ordering::Greater))),
        Op::LessThanEqual => {
            Ok(Value::Bool(matches!(compare(left, right), Some(Ordering::Less | Ordering::Equal))))
        },
        Op::GreaterThanEqual => {
            Ok(Value::Bool(matches!(compare(left, right),
                                    Some(Ordering::Greater | Ordering::Equal))))
        },
        Op::And => Ok(Value::Integer(left.rounded() & right.rounded())),
        Op::Or => Ok(Value::Integer(left.rounded() | right.rounded())),
        Op::Xor => Ok(Value::Integer(left.rounded() ^ right.rounded())),
        Op::AndAlso => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        Op::OrElse => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        // Unary operators and the parenthesis markers are routed by arity
        // and never reach this function.
        _ => unreachable!(),
    }
}

/// Dispatches an arithmetic operation over the promotion rule: integer only
/// when both operands project to integers, float otherwise.
fn promote(left: &Value,
           right: &Value,
           int_op: impl Fn(i64, i64) -> i64,
           float_op: impl Fn(f64, f64) -> f64)
           -> Value {
    match (left.num(), right.num()) {
        (Num::Int(a), Num::Int(b)) => Value::Integer(int_op(a, b)),
        (a, b) => Value::Float(float_op(a.as_f64(), b.as_f64())),
    }
}

/// Rounds both operands to integers and shifts, with the shift amount masked
/// to 6 bits so oversized and negative counts stay defined.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn shifted(left: &Value, right: &Value, shift: impl Fn(i64, u32) -> i64) -> i64 {
    shift(left.rounded(), (right.rounded() & 63) as u32)
}

/// Compares two operands numerically. Mixed kinds widen the integer side to
/// a float; a `NaN` operand makes the comparison unordered (`None`), so every
/// ordering test on it is false and `<>` is true.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left.num(), right.num()) {
        (Num::Int(a), Num::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
    }
}
